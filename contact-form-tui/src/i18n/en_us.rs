//! 英文翻译 (en-US)

use super::keys::{
    ActionTexts, AlertTexts, ChoiceTexts, CommonTexts, ConfirmDeleteTexts, FieldLabels,
    FormTexts, HelpActionTexts, HelpTexts, HintTexts, KeyNames, ListTexts, ModalTexts,
    StatusBarTexts, Translations,
};

pub const TRANSLATIONS: Translations = Translations {
    // ========================================================================
    // 通用文本
    // ========================================================================
    common: CommonTexts {
        app_name: "Contact Form",
        edit: "Edit",
        delete: "Delete",
        cancel: "Cancel",
        close: "Close",
        quit: "Quit",
        error: "Error",
        success: "Success",
    },

    // ========================================================================
    // 键盘提示
    // ========================================================================
    hints: HintTexts {
        keys: KeyNames {
            enter: "Enter",
            esc: "Esc",
            tab: "Tab",
            space: "Space",
            arrows_lr: "←→",
            arrows_ud: "↑↓",
        },
        actions: ActionTexts {
            next_field: "Next field",
            choose: "Choose",
            toggle: "Toggle",
            submit: "Submit",
            cancel_edit: "Cancel edit",
            select: "Select",
            switch_view: "Switch view",
            refresh: "Refresh",
            help: "Help",
        },
    },

    // ========================================================================
    // 表单视图
    // ========================================================================
    form: FormTexts {
        title_create: "Contact Form",
        title_edit: "Edit Form",
        submit: "Submit",
        update: "Update",
        submitting: "Submitting...",
        labels: FieldLabels {
            name: "Name",
            email: "Email",
            mobile_number: "Mobile Number",
            address: "Address",
            state: "State",
            city: "City",
            age: "Age",
            gender: "Gender",
            terms: "I accept the terms and conditions",
            contact_method: "Preferred Contact Method",
            hobbies: "Hobbies",
            message: "Message",
        },
        choices: ChoiceTexts {
            male: "Male",
            female: "Female",
            email: "Email",
            phone: "Phone",
            reading: "Reading",
            travelling: "Travelling",
            sports: "Sports",
            coding: "Coding",
        },
        none_selected: "(none)",
    },

    // ========================================================================
    // 列表视图
    // ========================================================================
    list: ListTexts {
        title: "Submitted Forms",
        no_forms: "No forms submitted yet",
        no_forms_hint: "Press Ctrl+T to go back to the form",
        column_name: "Name",
        column_email: "Email",
        column_address: "Address",
        last_refreshed: "refreshed",
        never_refreshed: "not loaded",
    },

    // ========================================================================
    // 弹窗
    // ========================================================================
    modal: ModalTexts {
        confirm_delete: ConfirmDeleteTexts {
            title: "Confirm Deletion",
            prompt: "Are you sure you want to delete this form?",
            unnamed: "(unnamed)",
        },
        alerts: AlertTexts {
            submitted: "Form submitted successfully",
            updated: "Form updated successfully",
            deleted: "Form deleted successfully",
            submit_failed: "Error submitting form",
            delete_failed: "Error deleting form",
            edit_failed: "This form is no longer available",
        },
        press_to_close: "Press Esc or Enter to close",
    },

    // ========================================================================
    // 状态栏
    // ========================================================================
    status_bar: StatusBarTexts {
        loading: "Loading forms...",
        submitting: "Submitting...",
        already_submitting: "Already submitting, please wait",
        deleting: "Deleting...",
        refresh_failed: "Failed to refresh forms",
        invalid_fields: "Fields need attention:",
        edit_cancelled: "Edit cancelled",
    },

    // ========================================================================
    // 帮助
    // ========================================================================
    help: HelpTexts {
        title: "Keyboard Shortcuts",
        global: "Global",
        form: "Form",
        list: "List",
        actions: HelpActionTexts {
            toggle_view: "Switch between form and list",
            quit: "Quit",
            show_help: "Show this help",
            move_field: "Move between fields",
            choose_option: "Choose gender / contact method / hobby",
            toggle_check: "Toggle checkbox or hobby",
            submit_form: "Submit or update",
            cancel_edit: "Cancel editing",
            select_row: "Select a form",
            edit_row: "Edit selected form",
            delete_row: "Delete selected form",
            refresh_list: "Refresh list",
        },
    },
};

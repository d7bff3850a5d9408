//! 简体中文翻译 (zh-CN)

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
        app_name: "联系表单",
        edit: "编辑",
        delete: "删除",
        cancel: "取消",
        close: "关闭",
        quit: "退出",
        error: "错误",
        success: "成功",
    },

    // ========================================================================
    // 键盘提示
    // ========================================================================
    hints: HintTexts {
        keys: KeyNames {
            enter: "Enter",
            esc: "Esc",
            tab: "Tab",
            space: "空格",
            arrows_lr: "←→",
            arrows_ud: "↑↓",
        },
        actions: ActionTexts {
            next_field: "下一项",
            choose: "选择",
            toggle: "勾选",
            submit: "提交",
            cancel_edit: "取消编辑",
            select: "选择",
            switch_view: "切换视图",
            refresh: "刷新",
            help: "帮助",
        },
    },

    // ========================================================================
    // 表单视图
    // ========================================================================
    form: FormTexts {
        title_create: "联系表单",
        title_edit: "编辑表单",
        submit: "提交",
        update: "更新",
        submitting: "提交中...",
        labels: FieldLabels {
            name: "姓名",
            email: "邮箱",
            mobile_number: "手机号",
            address: "地址",
            state: "州/省",
            city: "城市",
            age: "年龄",
            gender: "性别",
            terms: "我已阅读并接受条款",
            contact_method: "首选联系方式",
            hobbies: "爱好",
            message: "留言",
        },
        choices: ChoiceTexts {
            male: "男",
            female: "女",
            email: "邮箱",
            phone: "电话",
            reading: "阅读",
            travelling: "旅行",
            sports: "运动",
            coding: "编程",
        },
        none_selected: "（未选择）",
    },

    // ========================================================================
    // 列表视图
    // ========================================================================
    list: ListTexts {
        title: "已提交表单",
        no_forms: "暂无已提交的表单",
        no_forms_hint: "按 Ctrl+T 返回表单",
        column_name: "姓名",
        column_email: "邮箱",
        column_address: "地址",
        last_refreshed: "刷新于",
        never_refreshed: "未加载",
    },

    // ========================================================================
    // 弹窗
    // ========================================================================
    modal: ModalTexts {
        confirm_delete: ConfirmDeleteTexts {
            title: "确认删除",
            prompt: "确定要删除这份表单吗？",
            unnamed: "（未命名）",
        },
        alerts: AlertTexts {
            submitted: "表单提交成功",
            updated: "表单更新成功",
            deleted: "表单删除成功",
            submit_failed: "提交表单出错",
            delete_failed: "删除表单出错",
            edit_failed: "该表单已不存在",
        },
        press_to_close: "按 Esc 或 Enter 关闭",
    },

    // ========================================================================
    // 状态栏
    // ========================================================================
    status_bar: StatusBarTexts {
        loading: "正在加载表单...",
        submitting: "提交中...",
        already_submitting: "正在提交，请稍候",
        deleting: "删除中...",
        refresh_failed: "刷新表单失败",
        invalid_fields: "需要修改的字段：",
        edit_cancelled: "已取消编辑",
    },

    // ========================================================================
    // 帮助
    // ========================================================================
    help: HelpTexts {
        title: "快捷键",
        global: "全局",
        form: "表单",
        list: "列表",
        actions: HelpActionTexts {
            toggle_view: "在表单与列表之间切换",
            quit: "退出",
            show_help: "显示帮助",
            move_field: "在字段间移动",
            choose_option: "选择性别 / 联系方式 / 爱好",
            toggle_check: "勾选复选框或爱好",
            submit_form: "提交或更新",
            cancel_edit: "取消编辑",
            select_row: "选择表单",
            edit_row: "编辑所选表单",
            delete_row: "删除所选表单",
            refresh_list: "刷新列表",
        },
    },
};

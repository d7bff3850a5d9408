//! 命令执行器

use std::sync::Arc;

use anyhow::{Context, Result};
use contact_form_core::{Command, Completion, FormService, HttpRecordStore, ServiceContext};
use tokio::runtime::{Builder, Runtime};
use tokio::sync::mpsc::{self, UnboundedReceiver, UnboundedSender};

/// 在后台运行时上执行 `Command`，结果通过通道交回主循环
pub struct FormBackend {
    runtime: Runtime,
    service: FormService,
    tx: UnboundedSender<Completion>,
    rx: UnboundedReceiver<Completion>,
}

impl FormBackend {
    /// 创建执行器并连接到指定的表单服务地址
    pub fn new(base_url: &str) -> Result<Self> {
        let store = HttpRecordStore::new(base_url)
            .with_context(|| format!("invalid API base URL: {base_url}"))?;
        log::info!("Using form service at {}", store.base_url());

        let runtime = Builder::new_multi_thread()
            .worker_threads(2)
            .thread_name("contact-form-worker")
            .enable_all()
            .build()
            .context("failed to start async runtime")?;

        let service = FormService::new(Arc::new(ServiceContext::new(Arc::new(store))));
        let (tx, rx) = mpsc::unbounded_channel();

        Ok(Self {
            runtime,
            service,
            tx,
            rx,
        })
    }

    /// 在后台执行命令，不阻塞调用方
    pub fn spawn(&self, command: Command) {
        log::debug!("Dispatching {} command", command.name());
        let service = self.service.clone();
        let tx = self.tx.clone();

        self.runtime.spawn(async move {
            let completion = service.execute(command).await;
            if tx.send(completion).is_err() {
                log::debug!("UI loop gone, dropping completion");
            }
        });
    }

    /// 取出一个已完成的结果（非阻塞）
    pub fn try_recv(&mut self) -> Option<Completion> {
        self.rx.try_recv().ok()
    }
}

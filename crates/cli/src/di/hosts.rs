use hostsdns_application::ports::HostsReloadPort;
use hostsdns_application::services::HostsReloadService;
use hostsdns_application::use_cases::{CheckHostsModifiedUseCase, LoadHostsFileUseCase};
use hostsdns_domain::Config;
use hostsdns_infrastructure::dns::{HostsDnsServer, QueryResponder};
use hostsdns_infrastructure::hosts::{FileHostsSource, ResolutionTable};
use hostsdns_jobs::HostsReloadJob;
use std::sync::Arc;
use tracing::info;

pub struct HostsServices {
    pub source: Arc<FileHostsSource>,
    pub table: Arc<ResolutionTable>,
    pub reload: Arc<dyn HostsReloadPort>,
    pub server: HostsDnsServer,
}

impl HostsServices {
    pub fn new(config: &Config) -> Self {
        info!(path = %config.hosts.path, "Initializing hosts services");

        let source = Arc::new(FileHostsSource::new(config.hosts.path.clone()));
        let table = Arc::new(ResolutionTable::new());

        let load = Arc::new(LoadHostsFileUseCase::new(source.clone(), table.clone()));
        let check_modified = Arc::new(CheckHostsModifiedUseCase::new(
            source.clone(),
            table.clone(),
        ));
        let reload: Arc<dyn HostsReloadPort> =
            Arc::new(HostsReloadService::new(load, check_modified));

        let responder = QueryResponder::new(table.clone())
            .with_nxdomain_placeholder(config.dns.nxdomain_placeholder);
        let server = HostsDnsServer::new(config.server.listen_addr(), responder, reload.clone())
            .with_recv_buffer_size(config.server.recv_buffer_size);

        Self {
            source,
            table,
            reload,
            server,
        }
    }

    pub fn reload_job(&self, config: &Config) -> HostsReloadJob {
        HostsReloadJob::new(self.reload.clone()).with_interval(config.hosts.reload_interval_secs)
    }
}

use crate::configuration::Settings;
use crate::{
    routes::{contact_json_config, health_check, home, submit_contact},
    telegram_client::TelegramClient,
};
use actix_web::{App, HttpServer, dev::Server, web};
use std::net::TcpListener;
use tracing_actix_web::TracingLogger;

/// `Application` works as a wrapper for actix_web `dev::Server`.
/// `dev::Server` does not tell us which port it ended up on, so we keep the port
/// alongside it. The tests bind to port 0 and need to know where to send requests.
pub struct Application {
    port: u16,
    server: Server,
}

impl Application {
    /// Given a configuration of type `Settings`:
    /// 1. A Telegram client is configured
    /// 2. A server is started with `run`, which can be awaited using `run_until_stopped`
    pub async fn build(configuration: Settings) -> Result<Self, std::io::Error> {
        let timeout = configuration.telegram.timeout();
        let telegram_client = TelegramClient::new(
            configuration.telegram.base_url,
            configuration.telegram.bot_token,
            configuration.telegram.chat_id,
            timeout,
        );

        let address = format!(
            "{}:{}",
            configuration.application.host, configuration.application.port
        );
        let listener = TcpListener::bind(address)?;
        let port = listener.local_addr()?.port();

        let server = run(
            listener,
            telegram_client,
            configuration.application.site_name,
        )?;
        Ok(Self { port, server })
    }

    pub fn port(&self) -> u16 {
        self.port
    }

    /// This function only returns when the application is stopped
    pub async fn run_until_stopped(self) -> Result<(), std::io::Error> {
        self.server.await
    }
}

/// Name of the website, as it appears in relayed notifications.
pub struct ApplicationSiteName(pub String);

pub fn run(
    listener: TcpListener,
    telegram_client: TelegramClient,
    site_name: String,
) -> Result<Server, std::io::Error> {
    // web::Data wraps its content in an Arc<T>
    let telegram_client = web::Data::new(telegram_client);
    let site_name = web::Data::new(ApplicationSiteName(site_name));
    let server = HttpServer::new(move || {
        App::new()
            .wrap(TracingLogger::default())
            .route("/", web::get().to(home))
            .route("/health_check", web::get().to(health_check))
            .service(
                web::resource("/api/contact")
                    .app_data(contact_json_config())
                    .route(web::post().to(submit_contact)),
            )
            .app_data(telegram_client.clone())
            .app_data(site_name.clone())
    })
    .listen(listener)?
    .run();
    Ok(server)
}

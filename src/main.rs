use notification_fanout::config::get_configuration;
use notification_fanout::startup::Application;
use notification_fanout::telemetry::{get_subscriber, init_subscriber};

#[tokio::main]
async fn main() -> std::io::Result<()> {
    let subscriber = get_subscriber(String::from("notification_fanout"), String::from("info"));

    init_subscriber(subscriber);

    let config = get_configuration().expect("Missing configuration file.");
    let application = Application::build(config).await?;

    application.run_until_stop().await
}

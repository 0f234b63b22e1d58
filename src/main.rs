use article_submitter::config::read_config;
use article_submitter::controller::SubmissionController;
use article_submitter::domain::FormInput;
use article_submitter::submit_client::SubmitClient;
use article_submitter::telemetry::init_logging;
use article_submitter::terminal::TerminalView;
use tokio::io::{AsyncBufReadExt, BufReader, Lines, Stdin};

async fn prompt(lines: &mut Lines<BufReader<Stdin>>, label: &str) -> std::io::Result<Option<String>> {
    println!("{}:", label);
    lines.next_line().await
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    init_logging("article_submitter", "info", std::io::stderr)?;

    let config = read_config()?;
    let client = SubmitClient::new(config.endpoint.base_url.clone(), config.endpoint.timeout())?;
    let controller = SubmissionController::new(
        client,
        TerminalView::new(std::io::stdout()),
        config.form.warmup_delay(),
    );

    let mut lines = BufReader::new(tokio::io::stdin()).lines();
    loop {
        let Some(email) = prompt(&mut lines, "Email").await? else {
            break;
        };
        let Some(article_url) = prompt(&mut lines, "Article URL").await? else {
            break;
        };
        controller.view().set_input(FormInput::new(email, article_url));
        controller.handle_submit().await;
    }
    Ok(())
}

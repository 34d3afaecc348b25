//! Create a payment and poll its status.
//!
//! ```sh
//! QI_TERMINAL_ID=my-terminal QI_USERNAME=merchant QI_PASSWORD=secret \
//!     cargo run --example create_payment
//! ```

use anyhow::Context;
use qicard_sdk::client::PaymentClient;
use qicard_sdk::config::ClientConfig;
use qicard_sdk::objects::payment::CreatePaymentRequest;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let terminal_id = std::env::var("QI_TERMINAL_ID").context("QI_TERMINAL_ID is not set")?;

    let mut config = ClientConfig::new(terminal_id);
    if let (Ok(username), Ok(password)) =
        (std::env::var("QI_USERNAME"), std::env::var("QI_PASSWORD"))
    {
        config = config.with_basic_auth(username, password);
    }
    if let Ok(signature) = std::env::var("QI_SIGNATURE") {
        config = config.with_signature(signature);
    }
    let client = PaymentClient::new(config)?;

    let payment = client
        .create_payment(&CreatePaymentRequest {
            request_id: format!("demo-{}", std::process::id()),
            amount: Some("100.5".parse()?),
            currency: Some("IQD".into()),
            finish_payment_url: Some("https://merchant.example.com/done".into()),
            ..Default::default()
        })
        .await?;

    println!("payment {} is {}", payment.payment_id, payment.status);
    if let Some(form_url) = &payment.form_url {
        println!("send the payer to {form_url}");
    }

    let status = client.payment_status(&payment.payment_id).await?;
    println!("status: {} (created {})", status.status, status.creation_date);

    Ok(())
}

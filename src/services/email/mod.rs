use resend_rs::{types::CreateEmailBaseOptions, Resend};

#[derive(Clone)]
pub struct EmailLayer {
    api_key: String,
    pub domain: String,
}

impl EmailLayer {
    pub fn new(api_key: String, domain: String) -> Self {
        Self { api_key, domain }
    }

    pub async fn send_order_confirmation(
        &self,
        to: String,
        order_id: String,
    ) -> Result<(), resend_rs::Error> {
        let resend = Resend::new(&self.api_key);

        let from = format!("Mapjun <noreply@{}>", &self.domain);
        let to = [to];
        let subject = "Mapjun - Your guide is ready";

        let download_url = format!("https://{}/download/{}", &self.domain, order_id);

        let email = CreateEmailBaseOptions::new(from, to, subject).with_html(
            format!(
                "
                <strong>Thank you for your purchase!</strong>
                <a href=\"{}\">Download your guide</a>
            ",
                download_url
            )
            .as_str(),
        );

        let _email = resend.emails.send(email).await?;

        Ok(())
    }
}

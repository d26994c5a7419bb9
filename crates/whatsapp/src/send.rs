use reqwest::multipart::{Form, Part};

use crate::WhatsappClient;

impl WhatsappClient {
    /// Send a plain text message.
    ///
    /// POST /send/message
    pub async fn send_message(&self, phone: &str, message: &str) -> crate::Result<()> {
        let params = [("phone", phone), ("message", message)];
        let response = self.post("/send/message").form(&params).send().await?;
        self.handle_response(response).await
    }

    /// Send an image with the message as its caption.
    ///
    /// POST /send/image
    ///
    /// The gateway-side `compress` flag is always set so large posters are
    /// recoded before delivery.
    pub async fn send_image(&self, phone: &str, caption: &str, image: Vec<u8>) -> crate::Result<()> {
        let part = Part::bytes(image).file_name("image").mime_str("image/png")?;
        let form = Form::new()
            .text("phone", phone.to_string())
            .text("caption", caption.to_string())
            .text("compress", "true")
            .part("image", part);

        let response = self.post("/send/image").multipart(form).send().await?;
        self.handle_response(response).await
    }
}

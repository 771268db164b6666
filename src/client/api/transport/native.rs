use reqwest::multipart::{Form, Part};

use crate::client::{
    api::{
        request::{FormPart, HttpBody, HttpRequest, HttpResponse, Method, MultipartForm},
        transport::Transport,
    },
    error::Error,
};

#[derive(Clone, Debug, Default)]
pub struct ReqwestTransport {
    client: reqwest::Client,
}

impl ReqwestTransport {
    pub fn new(client: reqwest::Client) -> Self {
        Self { client }
    }
}

impl Transport for ReqwestTransport {
    async fn send(&self, request: HttpRequest) -> Result<HttpResponse, Error> {
        let method = match request.method {
            Method::Get => reqwest::Method::GET,
            Method::Post => reqwest::Method::POST,
            Method::Put => reqwest::Method::PUT,
            Method::Delete => reqwest::Method::DELETE,
        };

        let mut builder = self.client.request(method, &request.url);
        for (name, value) in &request.headers {
            builder = builder.header(name.as_str(), value.as_str());
        }

        builder = match request.body {
            HttpBody::Empty => builder,
            HttpBody::Text(payload) => builder.body(payload),
            HttpBody::Multipart(form) => builder.multipart(to_multipart(form)?),
        };

        let response = builder
            .send()
            .await
            .map_err(|e| Error::TransportError(format!("Failed to send request: {}", e)))?;

        let status = response.status();
        let body = response.text().await.map_err(|e| {
            Error::TransportError(format!("Failed to read response body: {}", e))
        })?;

        Ok(HttpResponse {
            status: status.as_u16(),
            status_text: status.canonical_reason().unwrap_or_default().to_string(),
            body,
        })
    }
}

fn to_multipart(form: MultipartForm) -> Result<Form, Error> {
    let mut multipart = Form::new();

    for part in form.into_parts() {
        multipart = match part {
            FormPart::Text { name, value } => multipart.text(name, value),
            FormPart::File {
                name,
                file_name,
                mime_type,
                bytes,
            } => {
                let part = Part::bytes(bytes)
                    .file_name(file_name)
                    .mime_str(&mime_type)
                    .map_err(|e| {
                        Error::TransportError(format!("Invalid mime type {:?}: {}", mime_type, e))
                    })?;

                multipart.part(name, part)
            }
        };
    }

    Ok(multipart)
}

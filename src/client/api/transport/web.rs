use reqwasm::http::{Method as FetchMethod, Request, RequestCredentials};
use web_sys::{AbortController, Blob, BlobPropertyBag, FormData};

use crate::client::{
    api::{
        request::{FormPart, HttpBody, HttpRequest, HttpResponse, Method, MultipartForm},
        transport::Transport,
    },
    error::Error,
};

/// Fetch API transport. Cookies are always included so the API can keep its own
/// session alongside ours.
#[derive(Clone, Copy, Debug, Default)]
pub struct ReqwasmTransport;

impl Transport for ReqwasmTransport {
    async fn send(&self, request: HttpRequest) -> Result<HttpResponse, Error> {
        let mut abort = AbortOnDrop::new()?;
        let signal = abort.controller.signal();

        let method = match request.method {
            Method::Get => FetchMethod::GET,
            Method::Post => FetchMethod::POST,
            Method::Put => FetchMethod::PUT,
            Method::Delete => FetchMethod::DELETE,
        };

        let mut builder = Request::new(&request.url)
            .method(method)
            .credentials(RequestCredentials::Include)
            .abort_signal(Some(&signal));
        for (name, value) in &request.headers {
            builder = builder.header(name, value);
        }

        builder = match request.body {
            HttpBody::Empty => builder,
            HttpBody::Text(payload) => builder.body(payload),
            HttpBody::Multipart(form) => builder.body(to_form_data(&form)?),
        };

        let response = builder
            .send()
            .await
            .map_err(|e| Error::TransportError(format!("Failed to send request: {}", e)))?;

        let status = response.status();
        let status_text = response.status_text();
        let body = response.text().await.map_err(|e| {
            Error::TransportError(format!("Failed to read response body: {}", e))
        })?;

        abort.armed = false;

        Ok(HttpResponse {
            status,
            status_text,
            body,
        })
    }
}

/// Aborts the fetch when the exchange future is dropped before completing.
struct AbortOnDrop {
    controller: AbortController,
    armed: bool,
}

impl AbortOnDrop {
    fn new() -> Result<Self, Error> {
        let controller = AbortController::new().map_err(js_error)?;

        Ok(Self {
            controller,
            armed: true,
        })
    }
}

impl Drop for AbortOnDrop {
    fn drop(&mut self) {
        if self.armed {
            self.controller.abort();
        }
    }
}

fn to_form_data(form: &MultipartForm) -> Result<FormData, Error> {
    let data = FormData::new().map_err(js_error)?;

    for part in form.parts() {
        match part {
            FormPart::Text { name, value } => {
                data.append_with_str(name, value).map_err(js_error)?;
            }
            FormPart::File {
                name,
                file_name,
                mime_type,
                bytes,
            } => {
                let array = js_sys::Uint8Array::from(bytes.as_slice());
                let blob_parts = js_sys::Array::of1(&array);
                let options = BlobPropertyBag::new();
                options.set_type(mime_type);

                let blob = Blob::new_with_u8_array_sequence_and_options(&blob_parts, &options)
                    .map_err(js_error)?;
                data.append_with_blob_and_filename(name, &blob, file_name)
                    .map_err(js_error)?;
            }
        }
    }

    Ok(data)
}

fn js_error<E: std::fmt::Debug>(err: E) -> Error {
    Error::TransportError(format!("{:?}", err))
}

use serde::Serialize;

// Archivo recibido en un multipart, antes de subirlo
#[derive(Debug, Clone)]
pub struct IncomingFile {
    pub name: String,
    pub content_type: String,
    pub bytes: Vec<u8>,
}

#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct UploadedFileBody {
    pub url: String,
}

#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct UploadedFileResponse {
    pub body: UploadedFileBody,
}

// Forma que esperan el widget de subida (uploadURL) y el formulario de
// administración (response.body.url)
#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct UploadedFile {
    pub name: String,
    pub size: usize,
    #[serde(rename = "type")]
    pub content_type: String,
    pub url: String,
    #[serde(rename = "uploadURL")]
    pub upload_url: String,
    pub response: UploadedFileResponse,
}

impl UploadedFile {
    pub fn new(name: String, content_type: String, size: usize, url: String) -> Self {
        Self {
            name,
            size,
            content_type,
            upload_url: url.clone(),
            response: UploadedFileResponse {
                body: UploadedFileBody { url: url.clone() },
            },
            url,
        }
    }
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct VehicleImagesResponse {
    pub message: String,
    pub images: Vec<String>,
    pub uploaded_files: Vec<UploadedFile>,
}

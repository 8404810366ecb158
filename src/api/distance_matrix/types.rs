use serde::Deserialize;

#[derive(Debug, Deserialize)]
pub struct MatrixResponse {
    pub status: String,
    pub error_message: Option<String>,

    #[serde(default)]
    pub rows: Vec<MatrixRow>,
}

#[derive(Debug, Deserialize)]
pub struct MatrixRow {
    pub elements: Vec<MatrixElement>,
}

#[derive(Debug, Deserialize)]
pub struct MatrixElement {
    pub status: String,

    /// Travel time in seconds, present when `status` is "OK".
    pub duration: Option<Measure>,

    /// Travel distance in meters, present when `status` is "OK".
    pub distance: Option<Measure>,
}

#[derive(Debug, Deserialize)]
pub struct Measure {
    pub value: f64,
}

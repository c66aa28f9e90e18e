use eframe::egui::Color32;

pub const WINDOW_TITLE: &str = "Document Summarizer";
pub const HEADING: &str = "Document Summarizer";
pub const SUBHEADING: &str = "Upload a PDF or DOCX and get a streamed summary.";

pub const UPLOAD_HINT: &str = "Drag & drop a document here, or click to browse";
pub const UPLOAD_BUSY_HINT: &str = "An upload is already in progress";
pub const LOADING_TEXT: &str = "Uploading and summarizing...";
pub const STREAMING_TEXT: &str = "Streaming...";
pub const RESET_LABEL: &str = "Upload Another";
pub const INTERRUPTED_TEXT: &str = "Partial summary (stream interrupted)";
pub const NOTIFICATION_TITLE: &str = "Error";

pub const UPLOAD_AREA_HEIGHT: f32 = 220.0;
pub const PARTIAL_SUMMARY_HEIGHT: f32 = 160.0;
pub const CORNER_RADIUS: u8 = 12;

pub const BORDER_COLOR: Color32 = Color32::from_rgb(0x4b, 0x55, 0x63);
pub const PRIMARY_COLOR: Color32 = Color32::from_rgb(0x63, 0x66, 0xf1);
pub const MUTED_TEXT: Color32 = Color32::from_rgb(0x9c, 0xa3, 0xaf);

//! NutriScan Common Library
//!
//! CLIとWeb(WASM)で共有される型とロジック。
//! 通信は行わない（各フロントエンドが MenuAnalyzer を実装する）。

pub mod error;
pub mod gemini;
pub mod intake;
pub mod messages;
pub mod parser;
pub mod prompts;
pub mod session;
pub mod state;
pub mod types;

pub use error::{AnalysisError, Error, IntakeError, Result, TransitionError};
pub use gemini::{build_menu_request, endpoint_url, GeminiResponse, GenerationSettings};
pub use intake::{check_file_size, check_mime_type, EncodedImage, SelectedFile, MAX_FILE_SIZE};
pub use parser::{extract_json, parse_menu_response};
pub use prompts::{build_menu_prompt, response_schema};
pub use session::{MenuAnalyzer, Session};
pub use state::{AppState, Status};
pub use types::{HealthRating, MenuAnalysisResult, MenuItem, NutritionData};

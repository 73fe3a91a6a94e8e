use axum::{Extension, Json};
use serde::{Deserialize, Serialize};

use chess_core::{pgn, PlayerColor};

use crate::clients::gemini::GeminiClient;
use crate::config::Config;
use crate::error::AppError;
use crate::prompt::PromptTemplate;
use crate::storage;

#[derive(Deserialize)]
pub struct AnalyzeRequest {
    pub pgn: String,
    pub color: PlayerColor,
}

#[derive(Serialize)]
pub struct AnalyzeResponse {
    pub analysis: String,
    pub saved: bool,
    pub warning: Option<String>,
}

/// POST /api/analyze
pub async fn analyze_game(
    Extension(config): Extension<Config>,
    Extension(template): Extension<PromptTemplate>,
    Extension(gemini): Extension<GeminiClient>,
    Json(req): Json<AnalyzeRequest>,
) -> Result<Json<AnalyzeResponse>, AppError> {
    if req.pgn.trim().is_empty() {
        return Err(AppError::BadRequest(
            "Please paste the PGN of your game.".to_string(),
        ));
    }

    if !pgn::is_valid_pgn(&req.pgn) {
        return Err(AppError::BadRequest(
            "Invalid or unsafe PGN. Paste only the game transcript, starting with [Event ...]."
                .to_string(),
        ));
    }

    let white = pgn::extract_header(&req.pgn, "White").unwrap_or_else(|| "?".to_string());
    let black = pgn::extract_header(&req.pgn, "Black").unwrap_or_else(|| "?".to_string());
    tracing::info!("Analyzing {white} vs {black}, submitted as {}", req.color);

    // A failed save is reported to the user but does not block the analysis.
    let (saved, warning) = match storage::save_game_and_log(&config.games_dir, &req.pgn) {
        Ok(_) => (true, None),
        Err(e) => {
            tracing::error!("Failed to save game or log: {e:#}");
            (false, Some(format!("Failed to save the game: {e}")))
        }
    };

    let full_prompt = template.compose(req.color, &req.pgn);
    let analysis = gemini.generate(&full_prompt).await?;

    Ok(Json(AnalyzeResponse {
        analysis,
        saved,
        warning,
    }))
}

//! # routes::vacancy
//!
//! | Method | Path           | Description                        |
//! |--------|----------------|------------------------------------|
//! | GET    | `/api/vacancy` | Fixed vacancy watchlist, verbatim  |

use axum::Json;

use crate::models::{VacancyEntry, VACANCIES};

/// GET /api/vacancy
pub async fn get_vacancies() -> Json<&'static [VacancyEntry]> {
    Json(&VACANCIES[..])
}

use serde::Deserialize;

use crate::error::{AppError, AppResult};

/// Review stored on every newly added movie until the user edits it.
pub const DEFAULT_REVIEW: &str = "I like it";

#[derive(Debug, Deserialize)]
pub struct AddForm {
    #[serde(default)]
    pub new_title: String,
}

impl AddForm {
    pub fn title(&self) -> AppResult<&str> {
        let title = self.new_title.trim();
        if title.is_empty() {
            return Err(AppError::InvalidForm("movie title is required".to_string()));
        }
        Ok(title)
    }
}

#[derive(Debug, Default, Deserialize)]
pub struct UpdateForm {
    pub new_rating: Option<String>,
    pub new_review: Option<String>,
}

/// Fields to overwrite on a stored movie. `None` leaves the stored value alone.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct MovieChanges {
    pub rating: Option<f64>,
    pub review: Option<String>,
}

impl UpdateForm {
    /// A rating that is blank, unparsable, non-finite or exactly zero counts as
    /// "not provided", as does an empty review.
    pub fn into_changes(self) -> MovieChanges {
        let rating = self
            .new_rating
            .as_deref()
            .and_then(|raw| raw.trim().parse::<f64>().ok())
            .filter(|value| value.is_finite() && *value != 0.0);

        let review = self.new_review.filter(|r| !r.is_empty());

        MovieChanges { rating, review }
    }
}

/// A search hit from the movie database, shown on the selection page.
#[derive(Clone, Debug, Deserialize)]
pub struct Candidate {
    pub id: i32,
    pub title: Option<String>,
    pub poster_path: Option<String>,
    pub overview: Option<String>,
    pub vote_average: Option<f64>,
    pub release_date: Option<String>,
}

/// Full metadata for one movie id.
#[derive(Clone, Debug, Deserialize)]
pub struct MovieDetail {
    pub id: i32,
    pub original_title: Option<String>,
    pub title: Option<String>,
    pub release_date: Option<String>,
    pub overview: Option<String>,
    pub vote_average: Option<f64>,
    pub poster_path: Option<String>,
}

#[derive(Clone, Debug, PartialEq)]
pub struct NewMovie {
    pub title: String,
    pub year: String,
    pub description: String,
    pub rating: f64,
    pub review: String,
    pub img_url: String,
}

impl NewMovie {
    /// A missing poster path leaves `img_url` as the bare image base.
    pub fn from_detail(detail: MovieDetail, image_base_url: &str) -> AppResult<Self> {
        let title = detail.original_title.or(detail.title).ok_or_else(|| {
            AppError::MalformedData(format!("movie {} has no title", detail.id))
        })?;

        let release_date = detail.release_date.ok_or_else(|| {
            AppError::MalformedData(format!("movie {} has no release date", detail.id))
        })?;

        Ok(Self {
            title,
            year: release_year(&release_date).to_string(),
            description: detail.overview.unwrap_or_default(),
            rating: detail.vote_average.unwrap_or_default(),
            review: DEFAULT_REVIEW.to_string(),
            img_url: format!("{image_base_url}{}", detail.poster_path.unwrap_or_default()),
        })
    }
}

/// Leading segment of a `YYYY-MM-DD` date, or the whole string if it has no dash.
pub fn release_year(release_date: &str) -> &str {
    release_date.split_once('-').map_or(release_date, |(year, _)| year)
}

use std::fmt;

/// The only model the backend currently renders with.
pub const MODEL: &str = "sora2";

/// Binary orientation choice; the wire format wants a fixed ratio string.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Orientation {
    Portrait,
    #[default]
    Landscape,
}

impl Orientation {
    pub fn aspect_ratio(self) -> &'static str {
        match self {
            Orientation::Portrait => "9:16",
            Orientation::Landscape => "16:9",
        }
    }
}

/// Clip length; the backend accepts exactly two values.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ClipDuration {
    #[default]
    Ten,
    Fifteen,
}

impl ClipDuration {
    pub fn seconds(self) -> u32 {
        match self {
            ClipDuration::Ten => 10,
            ClipDuration::Fifteen => 15,
        }
    }
}

/// What the user filled in before pressing Generate.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct GenerationForm {
    pub prompt: String,
    /// Foreign key into the gallery collaborator's reference images.
    pub custom_image_id: Option<String>,
    pub orientation: Orientation,
    pub duration: ClipDuration,
    pub no_music: bool,
    pub no_crowd: bool,
    pub no_commentators: bool,
    pub like_anime: bool,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FormError {
    EmptyPrompt,
    NoImageSelected,
}

impl fmt::Display for FormError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FormError::EmptyPrompt => write!(f, "please enter a prompt"),
            FormError::NoImageSelected => write!(f, "please select or upload an image"),
        }
    }
}

/// Fully assembled generation request, ready for the wire.
///
/// The boolean fields mirror the modifier toggles; the matching phrases are
/// already appended to `prompt`.
#[derive(Debug, Clone, PartialEq)]
pub struct GenerationRequest {
    pub model: String,
    pub custom_image_id: String,
    pub prompt: String,
    pub music: bool,
    pub crowd: bool,
    pub commentators: bool,
    pub like_anime: bool,
    pub duration: u32,
    pub aspect_ratio: String,
}

/// Validate the form and assemble the final prompt.
///
/// Modifier suffixes are appended to the trimmed prompt in a fixed order:
/// no-music, no-crowd, no-commentators, anime-style. Each is independently
/// optional; the order never varies.
pub fn build_request(form: &GenerationForm) -> Result<GenerationRequest, FormError> {
    let trimmed = form.prompt.trim();
    if trimmed.is_empty() {
        return Err(FormError::EmptyPrompt);
    }
    let custom_image_id = form
        .custom_image_id
        .clone()
        .ok_or(FormError::NoImageSelected)?;

    let mut prompt = trimmed.to_string();
    if form.no_music {
        prompt.push_str(" No music.");
    }
    if form.no_crowd {
        prompt.push_str(" No crowd.");
    }
    if form.no_commentators {
        prompt.push_str(" No commentators.");
    }
    if form.like_anime {
        prompt.push_str(" Filmed like anime.");
    }

    Ok(GenerationRequest {
        model: MODEL.to_string(),
        custom_image_id,
        prompt,
        music: form.no_music,
        crowd: form.no_crowd,
        commentators: form.no_commentators,
        like_anime: form.like_anime,
        duration: form.duration.seconds(),
        aspect_ratio: form.orientation.aspect_ratio().to_string(),
    })
}

#[derive(Debug, PartialEq, Eq, Clone, Copy, Default)]
pub enum AutoAdvance {
    #[default]
    Playing, // Timer is counting down to the next page
    Paused,  // Only manual navigation moves the page
}

impl AutoAdvance {
    pub fn is_playing(self) -> bool {
        self == AutoAdvance::Playing
    }

    pub fn toggled(self) -> Self {
        match self {
            AutoAdvance::Playing => AutoAdvance::Paused,
            AutoAdvance::Paused => AutoAdvance::Playing,
        }
    }
}

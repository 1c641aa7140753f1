// Chat notice entity
// Short colored lines written to the in-client message feed

const PREFIX: &str = "OSRS Logger: ";
const ERROR_COLOR: &str = "ff0000";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ChatNotice {
    pub message: String,
}

impl ChatNotice {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
        }
    }

    pub fn out_of_date() -> Self {
        Self::new("Out of date! Please update to continue logging.")
    }

    pub fn unauthorized() -> Self {
        Self::new("Authorization code incorrect. Loot has not been logged.")
    }

    pub fn logging_failed() -> Self {
        Self::new("An error has occurred. Loot has not been logged.")
    }

    pub fn disabled() -> [Self; 2] {
        [
            Self::new("Plugin temporarily disabled, due to too many errors."),
            Self::new("Logging will continue when client is reloaded."),
        ]
    }

    /// Game-message markup, e.g. `<col=ff0000>OSRS Logger: ...</col>`.
    pub fn render(&self) -> String {
        format!("<col={}>{}{}</col>", ERROR_COLOR, PREFIX, self.message)
    }
}

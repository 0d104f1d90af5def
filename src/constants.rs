// DOM contract: selectors and labels the page markup must provide.

// Every draggable picture carries this class
pub const PICTURE_SELECTOR: &str = ".picture";

// Singleton controls
pub const PLAY_BUTTON_ID: &str = "play-button";
pub const AUDIO_ID: &str = "backing-track";

// Play button labels reflect the audio element's state, not the motion session
pub const LABEL_PLAY: &str = "Play";
pub const LABEL_PAUSE: &str = "Pause";

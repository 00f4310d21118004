use engine::log;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum SoundClip {
    Background,
    GameOver,
}

impl SoundClip {
    fn name(&self) -> &'static str {
        match self {
            SoundClip::Background => "background",
            SoundClip::GameOver => "game_over",
        }
    }
}

/// Playback seam for the game loop. The loop only signals transitions
/// (pause, resume, game over); whatever sits behind this trait decides what
/// they sound like.
pub trait SoundPlayer {
    fn play(&mut self, clip: SoundClip);
    fn stop(&mut self, clip: SoundClip);
}

/// Backend that logs transitions instead of producing audio.
pub struct LogSoundPlayer;

impl SoundPlayer for LogSoundPlayer {
    fn play(&mut self, clip: SoundClip) {
        log!("Sound started: {}", clip.name());
    }

    fn stop(&mut self, clip: SoundClip) {
        log!("Sound stopped: {}", clip.name());
    }
}

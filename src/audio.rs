//! Sound effects and background music
//!
//! Every sound is synthesized from sine tones, so there are no sound files to
//! ship.  If no audio device can be opened, the game carries on in silence.
use rodio::buffer::SamplesBuffer;
use rodio::source::SineWave;
use rodio::{OutputStream, OutputStreamHandle, PlayError, Sink, Source, StreamError};
use std::fmt;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;
use std::time::Duration;
use thiserror::Error;

/// Sample rate of [`SineWave`], which every sound is rendered from
const SAMPLE_RATE: u32 = 48_000;

const EFFECT_VOLUME: f32 = 0.25;

const MUSIC_VOLUME: f32 = 0.12;

/// Notes of the eating chirp as (frequency in Hz, length in milliseconds)
const EAT_CHIRP: &[(f32, u64)] = &[(660.0, 40), (990.0, 70)];

/// Notes of the background tune, played on a loop.  A frequency of zero is a
/// rest.
const THEME: &[(f32, u64)] = &[
    (262.0, 180),
    (330.0, 180),
    (392.0, 180),
    (523.0, 180),
    (392.0, 180),
    (330.0, 180),
    (0.0, 180),
    (294.0, 180),
    (349.0, 180),
    (440.0, 180),
    (587.0, 180),
    (440.0, 180),
    (349.0, 180),
    (0.0, 180),
];

/// Short sounds played in response to something happening in the game
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub(crate) enum Effect {
    Eat,
}

impl Effect {
    fn sound(self) -> SamplesBuffer<f32> {
        let notes = match self {
            Effect::Eat => EAT_CHIRP,
        };
        SamplesBuffer::new(1, SAMPLE_RATE, render(notes))
    }
}

#[derive(Clone, Copy, Debug, Default, Eq, PartialEq)]
pub(crate) enum Music {
    #[default]
    Stopped,
    Playing,
    Paused,
}

pub(crate) struct Audio {
    music: Music,
    output: Option<Output>,
}

impl Audio {
    /// Open the default audio device.  If `enabled` is `false` or there's no
    /// usable device, the returned `Audio` never makes a sound.
    pub(crate) fn new(enabled: bool) -> Audio {
        let output = if enabled {
            match Output::open() {
                Ok(output) => Some(output),
                Err(e) => {
                    tracing::warn!(error = ?e, "no audio output available; continuing without sound");
                    None
                }
            }
        } else {
            None
        };
        Audio::with_output(output)
    }

    fn with_output(output: Option<Output>) -> Audio {
        Audio {
            music: Music::Stopped,
            output,
        }
    }

    /// An `Audio` that plays into sinks nobody listens to
    #[cfg(test)]
    pub(crate) fn offline() -> Audio {
        let (output, _, _) = Output::queued();
        Audio::with_output(Some(output))
    }

    pub(crate) fn play_effect(&self, effect: Effect) {
        if let Some(ref output) = self.output {
            tracing::trace!(?effect, "playing sound effect");
            output.play(effect.sound());
        }
    }

    pub(crate) fn music(&self) -> Music {
        self.music
    }

    /// Start the music over from the beginning
    pub(crate) fn start_music(&mut self) {
        let Some(ref output) = self.output else {
            return;
        };
        output.rewind.store(true, Ordering::Relaxed);
        output.music.play();
        self.set_music(Music::Playing);
    }

    pub(crate) fn pause_music(&mut self) {
        if self.music == Music::Playing {
            if let Some(ref output) = self.output {
                output.music.pause();
            }
            self.set_music(Music::Paused);
        }
    }

    pub(crate) fn resume_music(&mut self) {
        if self.music == Music::Paused {
            if let Some(ref output) = self.output {
                output.music.play();
            }
            self.set_music(Music::Playing);
        }
    }

    pub(crate) fn stop_music(&mut self) {
        if let Some(ref output) = self.output {
            output.music.pause();
        }
        self.set_music(Music::Stopped);
    }

    fn set_music(&mut self, music: Music) {
        if self.music != music {
            tracing::debug!(from = ?self.music, to = ?music, "music state changed");
            self.music = music;
        }
    }
}

impl fmt::Debug for Audio {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Audio")
            .field("music", &self.music)
            .field("output", &self.output.is_some())
            .finish()
    }
}

/// Where sounds go once they've been rendered
struct Output {
    /// Holds the [`Theme`] for the whole run; stopping the music only pauses
    /// this sink
    music: Sink,
    rewind: Arc<AtomicBool>,
    effects: EffectOutput,
}

enum EffectOutput {
    /// Each effect gets a detached sink of its own so that effects can
    /// overlap
    Device {
        handle: OutputStreamHandle,
        _stream: OutputStream,
    },
    #[cfg(test)]
    Queue(Sink),
}

impl Output {
    fn open() -> Result<Output, AudioError> {
        let (stream, handle) = OutputStream::try_default()?;
        let music = Sink::try_new(&handle)?;
        Ok(Output::new(
            music,
            EffectOutput::Device {
                handle,
                _stream: stream,
            },
        ))
    }

    fn new(music: Sink, effects: EffectOutput) -> Output {
        let rewind = Arc::new(AtomicBool::new(false));
        music.set_volume(MUSIC_VOLUME);
        music.pause();
        music.append(Theme::new(Arc::clone(&rewind)));
        Output {
            music,
            rewind,
            effects,
        }
    }

    /// Build an `Output` on sinks that aren't attached to a device, returning
    /// it along with the sample streams of the music and the effects
    #[cfg(test)]
    fn queued() -> (
        Output,
        rodio::queue::SourcesQueueOutput<f32>,
        rodio::queue::SourcesQueueOutput<f32>,
    ) {
        let (music, music_out) = Sink::new_idle();
        let (effects, effects_out) = Sink::new_idle();
        effects.set_volume(EFFECT_VOLUME);
        let output = Output::new(music, EffectOutput::Queue(effects));
        (output, music_out, effects_out)
    }

    fn play(&self, sound: SamplesBuffer<f32>) {
        match self.effects {
            EffectOutput::Device { ref handle, .. } => match Sink::try_new(handle) {
                Ok(sink) => {
                    sink.set_volume(EFFECT_VOLUME);
                    sink.append(sound);
                    sink.detach();
                }
                Err(e) => tracing::warn!(error = ?e, "failed to play sound effect"),
            },
            #[cfg(test)]
            EffectOutput::Queue(ref sink) => sink.append(sound),
        }
    }
}

/// The background tune, looping forever.  Setting `rewind` sends it back to
/// the first note the next time a sample is pulled.
#[derive(Debug)]
struct Theme {
    samples: Arc<[f32]>,
    pos: usize,
    rewind: Arc<AtomicBool>,
}

impl Theme {
    fn new(rewind: Arc<AtomicBool>) -> Theme {
        Theme {
            samples: render(THEME).into(),
            pos: 0,
            rewind,
        }
    }
}

impl Iterator for Theme {
    type Item = f32;

    fn next(&mut self) -> Option<f32> {
        if self.rewind.swap(false, Ordering::Relaxed) {
            self.pos = 0;
        }
        let sample = self.samples.get(self.pos).copied()?;
        self.pos = (self.pos + 1) % self.samples.len();
        Some(sample)
    }
}

impl Source for Theme {
    fn current_frame_len(&self) -> Option<usize> {
        None
    }

    fn channels(&self) -> u16 {
        1
    }

    fn sample_rate(&self) -> u32 {
        SAMPLE_RATE
    }

    fn total_duration(&self) -> Option<Duration> {
        None
    }
}

/// Render a sequence of (frequency, milliseconds) notes as mono samples
fn render(notes: &[(f32, u64)]) -> Vec<f32> {
    notes
        .iter()
        .flat_map(|&(freq, millis)| {
            SineWave::new(freq).take_duration(Duration::from_millis(millis))
        })
        .collect()
}

#[derive(Debug, Error)]
enum AudioError {
    #[error("failed to open audio output stream")]
    Stream(#[from] StreamError),
    #[error("failed to create audio sink")]
    Sink(#[from] PlayError),
}

//! Speaker output through rodio.

use std::sync::Arc;

use rodio::{buffer::SamplesBuffer, OutputStream, OutputStreamHandle, Sink};
use tracing::warn;

use crate::backend::{AudioBackend, AudioError, SoundHandle};
use crate::synth::PcmBuffer;

pub struct RodioBackend {
    // Dropping the stream stops all output.
    _stream: OutputStream,
    handle: OutputStreamHandle,
    sounds: Vec<Option<(u32, Arc<[i16]>)>>,
}

impl RodioBackend {
    /// Open the default output device.
    pub fn open() -> Result<Self, AudioError> {
        let (stream, handle) = OutputStream::try_default()
            .map_err(|e| AudioError::DeviceUnavailable(e.to_string()))?;
        Ok(Self {
            _stream: stream,
            handle,
            sounds: Vec::new(),
        })
    }
}

impl AudioBackend for RodioBackend {
    fn register(&mut self, pcm: PcmBuffer) -> Result<SoundHandle, AudioError> {
        let id = self.sounds.len() as u32;
        let rate = pcm.sample_rate();
        self.sounds.push(Some((rate, pcm.into_samples().into())));
        Ok(SoundHandle::new(id))
    }

    fn play(&mut self, handle: SoundHandle) {
        let Some(Some((rate, samples))) = self.sounds.get(handle.id() as usize) else {
            return;
        };
        match Sink::try_new(&self.handle) {
            Ok(sink) => {
                sink.append(SamplesBuffer::new(1, *rate, samples.to_vec()));
                sink.detach();
            }
            Err(e) => warn!(error = %e, "could not start playback"),
        }
    }

    fn release(&mut self, handle: SoundHandle) {
        if let Some(slot) = self.sounds.get_mut(handle.id() as usize) {
            *slot = None;
        }
    }

    fn name(&self) -> &'static str {
        "rodio"
    }
}

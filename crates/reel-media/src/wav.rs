//! RIFF/WAVE container wrapping for raw PCM audio.

use std::io::Cursor;

use hound::{SampleFormat, WavSpec, WavWriter};

use crate::error::{MediaError, MediaResult};

/// Shape of a raw PCM payload.
///
/// Matches the format produced by the speech service: mono, 24 kHz,
/// 16-bit little-endian signed samples.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PcmFormat {
    /// Channel count
    pub channels: u16,
    /// Samples per second
    pub sample_rate: u32,
    /// Sample width in bits
    pub bits_per_sample: u16,
}

impl Default for PcmFormat {
    fn default() -> Self {
        Self {
            channels: 1,
            sample_rate: 24_000,
            bits_per_sample: 16,
        }
    }
}

impl PcmFormat {
    /// Sample width in bytes.
    fn sample_bytes(&self) -> usize {
        (self.bits_per_sample / 8) as usize
    }
}

/// Wrap raw little-endian PCM samples in a WAV container.
///
/// The payload length must be a whole number of samples. Supported sample
/// widths are 8, 16, 24 and 32 bits.
pub fn pcm_to_wav(pcm: &[u8], format: &PcmFormat) -> MediaResult<Vec<u8>> {
    if !matches!(format.bits_per_sample, 8 | 16 | 24 | 32) {
        return Err(MediaError::UnsupportedSampleWidth(format.bits_per_sample));
    }

    let width = format.sample_bytes();
    if pcm.len() % width != 0 {
        return Err(MediaError::TruncatedSample {
            len: pcm.len(),
            width: format.bits_per_sample,
        });
    }

    let spec = WavSpec {
        channels: format.channels,
        sample_rate: format.sample_rate,
        bits_per_sample: format.bits_per_sample,
        sample_format: SampleFormat::Int,
    };

    let mut cursor = Cursor::new(Vec::new());
    {
        let mut writer = WavWriter::new(&mut cursor, spec)?;
        for sample in pcm.chunks_exact(width) {
            match format.bits_per_sample {
                8 => writer.write_sample(sample[0] as i8)?,
                16 => writer.write_sample(i16::from_le_bytes([sample[0], sample[1]]))?,
                24 => {
                    // Sign-extend the 3-byte little-endian sample
                    let raw =
                        i32::from_le_bytes([sample[0], sample[1], sample[2], 0]);
                    writer.write_sample((raw << 8) >> 8)?;
                }
                32 => writer.write_sample(i32::from_le_bytes([
                    sample[0], sample[1], sample[2], sample[3],
                ]))?,
                _ => unreachable!("validated above"),
            }
        }
        writer.finalize()?;
    }

    Ok(cursor.into_inner())
}

use byteorder::{LittleEndian, WriteBytesExt};

const SAMPLE_RATE: u32 = 44_100;
const HEADER_LEN: usize = 44;

/// A valid 16-bit mono PCM WAV clip of silence, used as the playable
/// stand-in when speech synthesis fails.
pub fn silent_wav_clip(millis: u32) -> Vec<u8> {
    let samples = SAMPLE_RATE.saturating_mul(millis) / 1000;
    let data_len = samples.saturating_mul(2);

    let mut out = Vec::with_capacity(HEADER_LEN + data_len as usize);
    // Writes into a Vec cannot fail.
    let _ = write_header(&mut out, data_len);
    out.resize(HEADER_LEN + data_len as usize, 0);
    out
}

fn write_header(out: &mut Vec<u8>, data_len: u32) -> std::io::Result<()> {
    out.extend_from_slice(b"RIFF");
    out.write_u32::<LittleEndian>(36 + data_len)?;
    out.extend_from_slice(b"WAVE");

    out.extend_from_slice(b"fmt ");
    out.write_u32::<LittleEndian>(16)?; // PCM fmt chunk length
    out.write_u16::<LittleEndian>(1)?; // PCM
    out.write_u16::<LittleEndian>(1)?; // mono
    out.write_u32::<LittleEndian>(SAMPLE_RATE)?;
    out.write_u32::<LittleEndian>(SAMPLE_RATE * 2)?; // byte rate
    out.write_u16::<LittleEndian>(2)?; // block align
    out.write_u16::<LittleEndian>(16)?; // bits per sample

    out.extend_from_slice(b"data");
    out.write_u32::<LittleEndian>(data_len)?;
    Ok(())
}

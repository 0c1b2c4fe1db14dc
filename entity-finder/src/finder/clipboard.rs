use bevy::log::warn;
use std::thread;

/// Write `text` to the system clipboard, exactly as given.
///
/// Some platforms restrict clipboard ownership to the thread that opened it,
/// so the write runs on a dedicated single-use thread and the caller blocks
/// until it finishes. Failures are logged, never propagated.
pub fn set_clipboard_text(text: &str) {
    let payload = text.to_owned();
    let writer = thread::spawn(move || -> Result<(), arboard::Error> {
        let mut clipboard = arboard::Clipboard::new()?;
        clipboard.set_text(payload)
    });
    match writer.join() {
        Ok(Ok(())) => {}
        Ok(Err(err)) => warn!("clipboard write failed: {err}"),
        Err(_) => warn!("clipboard thread panicked"),
    }
}

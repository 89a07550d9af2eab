use std::process::Command;

use super::errors::KapianError;

/// Speaks Chinese text through the platform synthesizer. Runs off the UI
/// thread via the task manager; a missing synthesizer is a user-visible
/// message, not a crash.
pub fn speak(text: &str) -> Result<(), KapianError> {
    let status = speech_command(text)
        .status()
        .map_err(|e| KapianError::Custom(format!("Failed to start speech synthesizer: {e}")))?;

    if !status.success() {
        return Err(KapianError::Custom(format!("Speech synthesizer exited with {status}")));
    }

    Ok(())
}

#[cfg(target_os = "macos")]
fn speech_command(text: &str) -> Command {
    let mut cmd = Command::new("say");
    cmd.arg("-v").arg("Tingting").arg(text);
    cmd
}

#[cfg(target_os = "windows")]
fn speech_command(text: &str) -> Command {
    let mut cmd = Command::new("powershell");
    cmd.arg("-NoProfile").arg("-Command").arg(format!(
        "Add-Type -AssemblyName System.Speech; \
         $s = New-Object System.Speech.Synthesis.SpeechSynthesizer; \
         $s.Speak('{}')",
        text.replace('\'', "''")
    ));
    cmd
}

#[cfg(not(any(target_os = "macos", target_os = "windows")))]
fn speech_command(text: &str) -> Command {
    let mut cmd = Command::new("espeak-ng");
    cmd.arg("-v").arg("cmn").arg(text);
    cmd
}

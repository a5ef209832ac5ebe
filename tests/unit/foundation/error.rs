use super::*;

#[test]
fn display_prefixes_are_stable() {
    assert!(
        WavepeekError::UnrecognizedFormat(PathBuf::from("x.bin"))
            .to_string()
            .contains("unrecognized audio format:")
    );
    assert!(
        WavepeekError::OutOfMemory(1024)
            .to_string()
            .contains("out of memory:")
    );
    assert!(
        WavepeekError::output_write("x")
            .to_string()
            .contains("output write error:")
    );
    assert!(
        WavepeekError::validation("x")
            .to_string()
            .contains("validation error:")
    );
}

#[test]
fn unrecognized_format_names_the_path() {
    let err = WavepeekError::UnrecognizedFormat(PathBuf::from("tune.xyz"));
    assert!(err.to_string().contains("tune.xyz"));
}

#[test]
fn other_preserves_source() {
    let base = std::io::Error::other("boom");
    let err = WavepeekError::Other(anyhow::Error::new(base));
    assert!(err.to_string().contains("boom"));
}

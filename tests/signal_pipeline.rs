use gridbox::io::DataBufferWriter;
use gridbox::signal::processing::{StreamingDft, dft};
use gridbox::signal::{Gaussian, Ricker, Signal, Sinusoid, sample};

#[test]
fn sampled_sinusoid_concentrates_at_its_carrier() {
    let signal = Sinusoid::new(5.0);
    let dt = 1.0 / 200.0;
    let samples = sample(&signal, 0.0, dt, 200);

    let mut streaming = StreamingDft::new(5.0, dt);
    for &s in &samples {
        streaming.accumulate_advance(s);
    }
    let batch = dft(&samples, dt, 5.0);
    assert!((streaming.value() - batch * dt).norm() < 1e-9);
    assert!(batch.norm() > 10.0 * dft(&samples, dt, 23.0).norm());
}

#[test]
fn off_time_truncates_generated_samples() {
    let mut signal = Gaussian::new(0.05, 0.2);
    signal.off_time = 0.2;
    let samples = sample(&signal, 0.0, 0.1, 5);
    assert!(samples[1] > 0.0);
    assert_eq!(&samples[3..], &[0.0, 0.0]);
}

#[test]
fn probe_recording_lands_in_a_data_file() {
    let dir = std::env::temp_dir().join(format!("gridbox-signal-{}", std::process::id()));
    let signal = Ricker::new(2.0, 0.25);
    let mut writer = DataBufferWriter::create(
        &dir,
        "ricker.dat",
        vec!["t".to_string(), "amplitude".to_string()],
    )
    .unwrap();

    let dt = 0.05;
    for i in 0..10 {
        let t = dt * i as f64;
        writer.push_row(&[t, signal.value(t)]).unwrap();
    }
    writer.flush().unwrap();

    let contents = std::fs::read_to_string(writer.path()).unwrap();
    let lines: Vec<&str> = contents.lines().collect();
    assert_eq!(lines.len(), 11);
    assert!(lines[0].contains("amplitude"));
    // the wavelet peak sits at t0 = 0.25, row 6 of the recording
    assert!(lines[6].starts_with("0.25\t1"));
    std::fs::remove_dir_all(&dir).ok();
}

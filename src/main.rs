use std::f64::consts::FRAC_PI_4;
use std::process::ExitCode;

use bytemuck::cast_slice;
use log::{debug, error, info};

use math::mat::{d2, d3};
use math::{complex, matrix, vector, Complex, MathResult, Matrix, Value};

fn run(angle: f64) -> MathResult<()> {
    let model = d2::transform((2.0, -1.0), angle, (1.0, 1.0))?;
    info!("model = {:.3}", model);

    // Row-major upload layout
    let upload: Vec<f32> = model.cells().iter().flatten().map(|e| e.re() as f32).collect();
    let bytes: &[u8] = cast_slice(&upload);
    debug!("model upload: {} bytes", bytes.len());

    let inverse = math::inv(&model.clone().into())?;
    let round_trip = math::mul(&model.into(), &inverse)?;
    info!("model * inverse = {:.3}", round_trip);

    let view = vector![1.0, 2.0, 2.0].unit();
    info!("view direction = {:.3} (|v| = {:.3})", view, view.norm());

    let a = matrix![[2.0, 1.0, -1.0], [-3.0, -1.0, 2.0], [-2.0, 1.0, 2.0]]?;
    let b = Matrix::col(&vector![8.0, -11.0, -3.0]);
    let x = a.inverse()?.mul(&b)?;
    info!("solution of a x = b: {:.3}", x.get_col(0)?);

    // Rotors go to the GPU as packed pairs of doubles
    let rotors: Vec<Complex> = (0..4)
        .map(|i| Complex::from_mag_angle(1.0, angle * i as f64))
        .collect();
    let packed: &[f64] = cast_slice(&rotors);
    debug!("packed rotors: {:?}", packed);

    let camera = d3::rotate_y(angle).mul(&d3::translate(0.0, 0.0, -5.0))?;
    let clip = camera.mul(&d3::projection(800.0, 600.0, 100.0))?;
    info!("view-projection = {:.3}", clip);

    let z = math::exp(&complex(0.0, angle).into())?;
    let equal = math::equals(&z, &Value::from(rotors[1]));
    info!("exp(i·angle) = {:.3}, matches rotor: {}", z, equal);

    Ok(())
}

fn main() -> ExitCode {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let angle = match std::env::args().nth(1) {
        Some(arg) => match arg.parse::<f64>() {
            Ok(angle) => angle,
            Err(e) => {
                error!("invalid angle {:?}: {}", arg, e);
                return ExitCode::FAILURE;
            }
        },
        None => FRAC_PI_4,
    };

    match run(angle) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            error!("{}", e);
            ExitCode::FAILURE
        }
    }
}

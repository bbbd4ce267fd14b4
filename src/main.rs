use std::env;
use std::fs::{
    self,
    File
};
use std::io::{
    BufWriter,
    Write
};
use std::path::{
    Path,
    PathBuf
};
use std::process::ExitCode;

use compphys::configuration::Configuration;
use compphys::math::integrate::diagnostic::RecordingSink;
use compphys::study::besselstudy::write_bessel_table;
use compphys::study::circlestudy::write_circle_area;
use compphys::study::derivativestudy::write_derivative_table;
use compphys::study::integrationstudy::write_integration_table;
use compphys::study::studyerror::StudyError;
use compphys::study::summationstudy::write_summation_table;

fn write_study<F>(path: PathBuf, write: F) -> Result<(), StudyError>
where
    F: FnOnce(&mut BufWriter<File>) -> Result<(), StudyError>,
{
    let file = File::create(&path)?;
    let mut out = BufWriter::new(file);
    write(&mut out)?;
    out.flush()?;
    println!("data stored in {}.", path.display());
    Ok(())
}

fn run() -> Result<(), StudyError> {
    let config = match env::args().nth(1) {
        Some(config_path) => Configuration::from_reader(config_path)?,
        None => Configuration::new()
    };

    let folder = Path::new(config.output_folder());
    fs::create_dir_all(folder)?;

    let sink = RecordingSink::new();
    write_study(folder.join("integrate.dat"),
                |out| write_integration_table(out, config.integration(), &sink))?;
    write_study(folder.join("derivative_test.dat"),
                |out| write_derivative_table(out, config.derivative()))?;
    write_study(folder.join("bessel.dat"),
                |out| write_bessel_table(out, config.bessel()))?;
    write_study(folder.join("sum_order.dat"),
                |out| write_summation_table(out, config.summation()))?;
    write_study(folder.join("area.out"),
                |out| write_circle_area(out, config.circle()))?;

    if !sink.is_empty() {
        eprintln!("legendre reported {} warnings; affected entries are written as 0.0", sink.len());
        if let Some(first) = sink.diagnostics().first() {
            eprintln!("first: {}", first);
        }
    }
    Ok(())
}

fn main() -> ExitCode {
    match run() {
        Ok(()) => ExitCode::SUCCESS,
        Err(error) => {
            eprintln!("error: {}", error);
            ExitCode::FAILURE
        }
    }
}

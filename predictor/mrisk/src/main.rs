use std::fs::File;
use std::io::BufReader;
use std::path::PathBuf;

use clap::{Args, Parser, Subcommand};
use log::{debug, error, info};
use mrisk::config::MODEL_PATH_ENV;
use mrisk::render::render_fields;
use mrisk::{assess, Config, OutputFormat, Report, DEFAULT_MODEL_PATH};
use mrisk_features::{RawFields, AGE_RANGE, DEFAULT_AGE};
use mrisk_model::{ArtifactModel, PredictionAdapter};

#[derive(Debug, Parser)]
#[command(
    name = "mrisk",
    version,
    about = "Maternal high-risk pregnancy predictor",
    long_about = "mrisk checks maternal-health measurements and scores them with a trained\n\
        risk model, printing a verdict and the high-risk probability.\n\n\
        EXAMPLES:\n\
        \n  mrisk predict --gestational-age 32 --weight 65.5 --height 5.4 \\\n\
        \n        --blood-pressure 120/80 --fetal-heart-rate 140 --anemia Mild\n\
        \n  mrisk --format json predict --input patient.json\n\
        \n  mrisk fields                      List the model's input columns"
)]
struct Cli {
    /// Increase verbosity level (-v, -vv, -vvv)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    verbose: u8,

    /// Trained model artifact (JSON)
    #[arg(
        long,
        value_name = "FILE",
        env = MODEL_PATH_ENV,
        default_value = DEFAULT_MODEL_PATH,
        global = true
    )]
    model: PathBuf,

    /// Output format
    #[arg(long, value_enum, default_value_t = OutputFormat::Text, global = true)]
    format: OutputFormat,

    #[command(subcommand)]
    command: Command,
}

#[derive(Debug, Subcommand)]
enum Command {
    /// Validate patient details and predict pregnancy risk
    Predict(PredictArgs),

    /// List the input columns in the order the model expects
    Fields,
}

#[derive(Debug, Args, Clone)]
struct PredictArgs {
    /// Read all fields from a JSON object instead of the flags below
    #[arg(long, value_name = "FILE")]
    input: Option<PathBuf>,

    /// Patient name (optional)
    #[arg(long, default_value_t)]
    name: String,

    /// Age in years
    #[arg(long, default_value_t = DEFAULT_AGE, value_parser = clap::value_parser!(i64).range(AGE_RANGE))]
    age: i64,

    /// Gravida: 1st, 2nd, 3rd
    #[arg(long, default_value_t)]
    gravida: String,

    /// TT injection: 1st, 2nd, 3rd
    #[arg(long, default_value_t)]
    tt_injection: String,

    /// Gestational age in weeks
    #[arg(long, default_value_t)]
    gestational_age: String,

    /// Weight in kg
    #[arg(long, default_value_t)]
    weight: String,

    /// Height in any unit, e.g. 5.3 (ft)
    #[arg(long, default_value_t)]
    height: String,

    /// Blood pressure, e.g. 120/80
    #[arg(long, default_value_t)]
    blood_pressure: String,

    /// Anemia: Normal, Mild, Moderate, Severe
    #[arg(long, default_value_t)]
    anemia: String,

    /// Jaundice: Normal, Yes
    #[arg(long, default_value_t)]
    jaundice: String,

    /// Fetal position: Normal, Abnormal
    #[arg(long, default_value_t)]
    fetal_position: String,

    /// Fetal heart rate in bpm
    #[arg(long, default_value_t)]
    fetal_heart_rate: String,

    /// Urine test, albumin: Normal, Higher
    #[arg(long, default_value_t)]
    urine_albumin: String,

    /// Urine test, sugar: No, Yes
    #[arg(long, default_value_t)]
    urine_sugar: String,

    /// VDRL: Negative, Positive
    #[arg(long, default_value_t)]
    vdrl: String,

    /// HRsAG: Negative, Positive
    #[arg(long, default_value_t)]
    hrsag: String,
}

impl PredictArgs {
    fn raw_fields(&self) -> Result<RawFields, String> {
        let Some(path) = &self.input else {
            return Ok(RawFields {
                name: self.name.clone(),
                age: self.age,
                gravida: self.gravida.clone(),
                tt_injection: self.tt_injection.clone(),
                gestational_age: self.gestational_age.clone(),
                weight: self.weight.clone(),
                height: self.height.clone(),
                blood_pressure: self.blood_pressure.clone(),
                anemia: self.anemia.clone(),
                jaundice: self.jaundice.clone(),
                fetal_position: self.fetal_position.clone(),
                fetal_heart_rate: self.fetal_heart_rate.clone(),
                urine_albumin: self.urine_albumin.clone(),
                urine_sugar: self.urine_sugar.clone(),
                vdrl: self.vdrl.clone(),
                hrsag: self.hrsag.clone(),
            });
        };

        let file = File::open(path)
            .map_err(|e| format!("failed to open '{}': {e}", path.display()))?;
        let raw: RawFields = serde_json::from_reader(BufReader::new(file))
            .map_err(|e| format!("failed to parse '{}': {e}", path.display()))?;
        if !AGE_RANGE.contains(&raw.age) {
            return Err(format!(
                "age {} is outside {}..={}",
                raw.age,
                AGE_RANGE.start(),
                AGE_RANGE.end()
            ));
        }
        Ok(raw)
    }
}

fn run_predict(config: &Config, args: &PredictArgs) -> i32 {
    // No degraded mode: a missing or broken model halts before input is read.
    let model = match ArtifactModel::load(&config.model_path) {
        Ok(model) => model,
        Err(e) => {
            error!("{e}");
            eprintln!("error: {e}");
            return 2;
        }
    };
    info!("Model loaded successfully!");

    let raw = match args.raw_fields() {
        Ok(raw) => raw,
        Err(e) => {
            eprintln!("error: {e}");
            return 2;
        }
    };
    debug!("raw fields {raw:?}");

    let adapter = PredictionAdapter::new(&model);
    let assessment = match assess(&raw, &adapter) {
        Ok(assessment) => assessment,
        Err(e) => {
            for message in e.messages() {
                eprintln!("error: {message}");
            }
            return 1;
        }
    };

    match Report::new(&raw, &assessment).render(config.format) {
        Ok(out) => {
            print!("{out}");
            if config.format == OutputFormat::Json {
                println!();
            }
            0
        }
        Err(e) => {
            eprintln!("error: failed to serialize report: {e}");
            2
        }
    }
}

fn run_fields(config: &Config) -> i32 {
    match render_fields(config.format) {
        Ok(out) => {
            print!("{out}");
            if config.format == OutputFormat::Json {
                println!();
            }
            0
        }
        Err(e) => {
            eprintln!("error: failed to serialize fields: {e}");
            2
        }
    }
}

fn run_cli() -> i32 {
    let cli = Cli::parse();
    let config = Config {
        model_path: cli.model,
        format: cli.format,
        verbosity: cli.verbose,
    };
    config.init_logging();
    debug!("config {config:?}");

    match &cli.command {
        Command::Predict(args) => run_predict(&config, args),
        Command::Fields => run_fields(&config),
    }
}

fn main() {
    std::process::exit(run_cli());
}

use clap::{CommandFactory, Parser, ValueEnum};
use numeval::{AngleUnit, calculate};

/// numeval evaluates arithmetic and scientific expressions supplied on the
/// command line.
#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
struct Args {
    /// Mathematical expression to evaluate, e.g. '1+1' or 'sin(pi/2)'.
    expression: Option<String>,

    /// How trigonometric function arguments are interpreted.
    #[arg(long, value_enum, default_value = "radian")]
    angle_unit: AngleUnitArg,
}

/// CLI-side mirror of [`AngleUnit`], kept here so the library stays free of
/// clap.
#[derive(ValueEnum, Debug, Copy, Clone, PartialEq, Eq)]
enum AngleUnitArg {
    /// Arguments are degrees.
    Degree,
    /// Arguments are radians.
    Radian,
}

impl From<AngleUnitArg> for AngleUnit {
    fn from(arg: AngleUnitArg) -> Self {
        match arg {
            AngleUnitArg::Degree => Self::Degree,
            AngleUnitArg::Radian => Self::Radian,
        }
    }
}

fn main() {
    let args = Args::parse();

    let Some(expression) = args.expression else {
        let _ = Args::command().print_help();
        std::process::exit(1);
    };

    match calculate(&expression, args.angle_unit.into()) {
        Ok(result) => println!("Результат: {result}"),
        Err(e) => {
            eprintln!("{e}");
            std::process::exit(1);
        },
    }
}

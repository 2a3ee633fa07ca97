extern crate clap;
extern crate env_logger;
#[macro_use]
extern crate failure;
#[macro_use]
extern crate log;
extern crate mandelgif;
extern crate num;
extern crate num_cpus;

use clap::{App, AppSettings, Arg, ArgMatches, SubCommand};
use mandelgif::encoder::save_gif;
use mandelgif::escape::evaluate;
use mandelgif::{animate_config, AnimationConfig, ComplexPoint, Region};
use num::Complex;
use std::str::FromStr;

/// Splits `s` at the first `separator` and parses both halves.
fn parse_pair<T: FromStr>(s: &str, separator: char) -> Option<(T, T)> {
    let index = s.find(separator)?;
    let left = T::from_str(&s[..index]).ok()?;
    let right = T::from_str(&s[index + 1..]).ok()?;
    Some((left, right))
}

/// "re,im" as a complex number.
fn parse_complex(s: &str) -> Option<Complex<f64>> {
    parse_pair(s, ',').map(|(re, im)| Complex { re, im })
}

fn validate_pair<T: FromStr>(s: &str, separator: char, err: &str) -> Result<(), String> {
    parse_pair::<T>(s, separator)
        .map(|_| ())
        .ok_or_else(|| err.to_string())
}

fn validate_range<T: FromStr + PartialOrd>(
    s: &str,
    low: T,
    high: T,
    isnotanumber_err: &str,
    isnotinrange_err: &str,
) -> Result<(), String> {
    match T::from_str(s) {
        Ok(i) => {
            if i >= low && i <= high {
                Ok(())
            } else {
                Err(isnotinrange_err.to_string())
            }
        }
        Err(_) => Err(isnotanumber_err.to_string()),
    }
}

const ANIMATE: &str = "animate";
const ORBIT: &str = "orbit";

const OUTPUT: &str = "output";
const LEFTLOWER: &str = "leftlower";
const RIGHTUPPER: &str = "rightupper";
const STEP: &str = "step";
const PRECISION: &str = "precision";
const THREADS: &str = "threads";
const DELAY: &str = "delay";
const CONSTANT: &str = "constant";
const ITERATIONS: &str = "iterations";

fn args<'a>() -> ArgMatches<'a> {
    let max_threads = num_cpus::get();

    App::new("mandelgif")
        .version("0.1.0")
        .about("Animates the Mandelbrot set resolving as iteration depth increases")
        .setting(AppSettings::SubcommandRequiredElseHelp)
        .subcommand(
            SubCommand::with_name(ANIMATE)
                .about("Render one frame per precision level into a looping GIF")
                .arg(
                    Arg::with_name(OUTPUT)
                        .required(true)
                        .long(OUTPUT)
                        .short("o")
                        .takes_value(true)
                        .help("Output file"),
                )
                .arg(
                    Arg::with_name(LEFTLOWER)
                        .required(false)
                        .long(LEFTLOWER)
                        .short("l")
                        .takes_value(true)
                        .allow_hyphen_values(true)
                        .default_value("-2.0,-1.25")
                        .validator(|s| {
                            validate_pair::<f64>(&s, ',', "Could not parse left lower corner")
                        })
                        .help("Left lower corner of the sampled region, as re,im"),
                )
                .arg(
                    Arg::with_name(RIGHTUPPER)
                        .required(false)
                        .long(RIGHTUPPER)
                        .short("r")
                        .takes_value(true)
                        .allow_hyphen_values(true)
                        .default_value("1.0,1.25")
                        .validator(|s| {
                            validate_pair::<f64>(&s, ',', "Could not parse right upper corner")
                        })
                        .help("Right upper corner of the sampled region, as re,im"),
                )
                .arg(
                    Arg::with_name(STEP)
                        .required(false)
                        .long(STEP)
                        .short("s")
                        .takes_value(true)
                        .default_value("0.01")
                        .validator(|s| {
                            validate_range(
                                &s,
                                ::std::f64::MIN_POSITIVE,
                                ::std::f64::MAX,
                                "Could not parse step size",
                                "Step size must be positive",
                            )
                        })
                        .help("Distance between neighbouring samples"),
                )
                .arg(
                    Arg::with_name(PRECISION)
                        .required(false)
                        .long(PRECISION)
                        .short("p")
                        .takes_value(true)
                        .default_value("30")
                        .validator(|s| {
                            validate_range(
                                &s,
                                1,
                                100_000,
                                "Could not parse precision",
                                "Precision must be between 1 and 100000",
                            )
                        })
                        .help("Number of frames; frame n is iterated n times"),
                )
                .arg(
                    Arg::with_name(THREADS)
                        .required(false)
                        .long(THREADS)
                        .short("t")
                        .takes_value(true)
                        .default_value("1")
                        .validator(move |s| {
                            validate_range(
                                &s,
                                1,
                                max_threads,
                                "Could not parse thread count",
                                &format!("Thread count must be between 1 and {}", max_threads),
                            )
                        })
                        .help("Number of threads to use when sampling a frame"),
                )
                .arg(
                    Arg::with_name(DELAY)
                        .required(false)
                        .long(DELAY)
                        .short("d")
                        .takes_value(true)
                        .default_value("100")
                        .validator(|s| {
                            validate_range(
                                &s,
                                10u32,
                                60_000,
                                "Could not parse frame delay",
                                "Frame delay must be between 10 and 60000 milliseconds",
                            )
                        })
                        .help("How long each frame is shown, in milliseconds"),
                ),
        )
        .subcommand(
            SubCommand::with_name(ORBIT)
                .about("Print the orbit of a single constant")
                .arg(
                    Arg::with_name(CONSTANT)
                        .required(true)
                        .long(CONSTANT)
                        .short("c")
                        .takes_value(true)
                        .allow_hyphen_values(true)
                        .validator(|s| validate_pair::<f64>(&s, ',', "Could not parse constant"))
                        .help("The constant c, as re,im"),
                )
                .arg(
                    Arg::with_name(ITERATIONS)
                        .required(false)
                        .long(ITERATIONS)
                        .short("n")
                        .takes_value(true)
                        .default_value("5")
                        .validator(|s| {
                            validate_range(
                                &s,
                                0,
                                1_000_000,
                                "Could not parse iteration count",
                                "Iteration count must be between 0 and 1000000",
                            )
                        })
                        .help("Number of iterations to perform"),
                ),
        )
        .get_matches()
}

fn value<'a>(matches: &'a ArgMatches, name: &str) -> Result<&'a str, failure::Error> {
    matches
        .value_of(name)
        .ok_or_else(|| format_err!("missing value for --{}", name))
}

fn complex_arg(matches: &ArgMatches, name: &str) -> Result<Complex<f64>, failure::Error> {
    let raw = value(matches, name)?;
    parse_complex(raw).ok_or_else(|| format_err!("could not parse --{} {}", name, raw))
}

fn number_arg<T>(matches: &ArgMatches, name: &str) -> Result<T, failure::Error>
where
    T: FromStr,
{
    let raw = value(matches, name)?;
    T::from_str(raw).map_err(|_| format_err!("could not parse --{} {}", name, raw))
}

fn run_animate(matches: &ArgMatches) -> Result<(), failure::Error> {
    let region = Region::from_corners(
        complex_arg(matches, LEFTLOWER)?,
        complex_arg(matches, RIGHTUPPER)?,
        number_arg(matches, STEP)?,
    )?;
    let config = AnimationConfig::new(region, number_arg(matches, PRECISION)?)
        .with_threads(number_arg(matches, THREADS)?);
    info!(
        "rendering {} frames of {}x{} on {} threads",
        config.max_precision,
        region.columns(),
        region.rows(),
        config.threads
    );

    let frames = animate_config(&config);
    save_gif(value(matches, OUTPUT)?, &frames, number_arg(matches, DELAY)?)?;
    Ok(())
}

fn run_orbit(matches: &ArgMatches) -> Result<(), failure::Error> {
    let c = ComplexPoint::from(complex_arg(matches, CONSTANT)?);
    let iterations: usize = number_arg(matches, ITERATIONS)?;

    let (orbit, bounded) = evaluate(iterations, c);
    for (i, z) in orbit.iter().enumerate() {
        println!("{}\t{}\t{}", i, z.real, z.imag);
    }
    if bounded {
        println!("bounded after {} iterations", iterations);
    } else {
        println!("escaped at iteration {}", orbit.len() - 1);
    }
    Ok(())
}

fn main() {
    env_logger::init();
    let matches = args();

    let result = match matches.subcommand() {
        (ANIMATE, Some(m)) => run_animate(m),
        (ORBIT, Some(m)) => run_orbit(m),
        (other, _) => Err(format_err!("unknown command {}", other)),
    };

    if let Err(e) = result {
        eprintln!("Render failure: {}", e);
        std::process::exit(1);
    }
}

// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at http://mozilla.org/MPL/2.0/.

extern crate clap;
extern crate env_logger;
#[macro_use]
extern crate log;
extern crate mandelzoom;
extern crate num_cpus;
extern crate rand;

use clap::{App, Arg, ArgMatches};
use mandelzoom::config::{MAX_ITERATION, SCALE_FACTOR};
use mandelzoom::{
    ImagePresenter, MandelError, Palette, Pixel, Raster, RenderConfig, Result, Session, Viewport,
};
use rand::rngs::StdRng;
use rand::SeedableRng;
use std::str::FromStr;

const OUTPUT: &str = "output";
const SIZE: &str = "size";
const REAL: &str = "real";
const IMAGINARY: &str = "imaginary";
const ITERATIONS: &str = "iterations";
const THREADS: &str = "threads";
const SCALE: &str = "scale";
const PALETTE: &str = "palette";
const SEED: &str = "seed";
const CLICK: &str = "click";
const FRAMES: &str = "frames";

fn parse_pair<T>(s: &str, separator: char) -> Option<(T, T)>
where
    T: FromStr,
{
    match s.find(separator) {
        None => None,
        Some(index) => match (T::from_str(&s[..index]), T::from_str(&s[index + 1..])) {
            (Ok(l), Ok(r)) => Some((l, r)),
            _ => None,
        },
    }
}

fn validate_pair<T: FromStr>(
    s: &str,
    separator: char,
    err: &str,
) -> std::result::Result<(), String> {
    match parse_pair::<T>(s, separator) {
        Some(_) => Ok(()),
        None => Err(err.to_string()),
    }
}

fn validate_range(
    s: &str,
    min: usize,
    max: usize,
    err: &str,
    range_err: &str,
) -> std::result::Result<(), String> {
    match usize::from_str(s) {
        Ok(v) if v >= min && v <= max => Ok(()),
        Ok(_) => Err(range_err.to_string()),
        Err(_) => Err(err.to_string()),
    }
}

fn args<'a>() -> ArgMatches<'a> {
    let max_threads = num_cpus::get();

    App::new("mandelzoom")
        .version("0.1.0")
        .about("Click-to-zoom Mandelbrot renderer")
        .arg(
            Arg::with_name(OUTPUT)
                .required(true)
                .long(OUTPUT)
                .short("o")
                .takes_value(true)
                .help("Output file (.png, or .ppm/.pnm)"),
        )
        .arg(
            Arg::with_name(SIZE)
                .long(SIZE)
                .short("s")
                .takes_value(true)
                .default_value("800x600")
                .validator(|s| validate_pair::<usize>(&s, 'x', "Could not parse output image size"))
                .help("Size of the raster"),
        )
        .arg(
            Arg::with_name(REAL)
                .long(REAL)
                .short("r")
                .takes_value(true)
                .allow_hyphen_values(true)
                .default_value("-2,1")
                .validator(|s| validate_pair::<f64>(&s, ',', "Could not parse real range"))
                .help("Start and end of the real axis"),
        )
        .arg(
            Arg::with_name(IMAGINARY)
                .long(IMAGINARY)
                .short("m")
                .takes_value(true)
                .allow_hyphen_values(true)
                .default_value("-1,1")
                .validator(|s| validate_pair::<f64>(&s, ',', "Could not parse imaginary range"))
                .help("Start and end of the imaginary axis"),
        )
        .arg(
            Arg::with_name(ITERATIONS)
                .long(ITERATIONS)
                .short("i")
                .takes_value(true)
                .validator(|s| {
                    validate_range(
                        &s,
                        1,
                        100_000,
                        "Could not parse iteration count",
                        "Iteration count must be between 1 and 100000",
                    )
                })
                .help("Maximum iterations per point [default: 80]"),
        )
        .arg(
            Arg::with_name(THREADS)
                .long(THREADS)
                .short("t")
                .takes_value(true)
                .validator(move |s| {
                    validate_range(
                        &s,
                        1,
                        max_threads,
                        "Could not parse thread count",
                        &format!("Thread count must be between 1 and {}", max_threads),
                    )
                })
                .help("Number of threads to render with [default: all cores]"),
        )
        .arg(
            Arg::with_name(SCALE)
                .long(SCALE)
                .takes_value(true)
                .validator(|s| match f64::from_str(&s) {
                    Ok(v) if v > 0.0 && v < 1.0 => Ok(()),
                    _ => Err("Scale factor must be strictly between 0 and 1".to_string()),
                })
                .help("How much each click shrinks the view [default: 0.5]"),
        )
        .arg(
            Arg::with_name(PALETTE)
                .long(PALETTE)
                .short("p")
                .takes_value(true)
                .possible_values(&["rainbow", "random"])
                .default_value("rainbow")
                .help("Color table for escaped points"),
        )
        .arg(
            Arg::with_name(SEED)
                .long(SEED)
                .takes_value(true)
                .validator(|s| {
                    u64::from_str(&s)
                        .map(|_| ())
                        .map_err(|_| "Could not parse seed".to_string())
                })
                .help("Seed for the random palette"),
        )
        .arg(
            Arg::with_name(CLICK)
                .long(CLICK)
                .short("c")
                .takes_value(true)
                .multiple(true)
                .number_of_values(1)
                .validator(|s| validate_pair::<usize>(&s, ',', "Could not parse click position"))
                .help("Pixel to zoom in on; repeat for successive clicks"),
        )
        .arg(
            Arg::with_name(FRAMES)
                .long(FRAMES)
                .short("f")
                .help("Write every frame to its own numbered file"),
        )
        .get_matches()
}

fn pair_of<T: FromStr>(matches: &ArgMatches, name: &str, separator: char) -> Result<(T, T)> {
    matches
        .value_of(name)
        .and_then(|s| parse_pair(s, separator))
        .ok_or_else(|| MandelError::Config(format!("could not read --{}", name)))
}

fn number_or<T: FromStr>(matches: &ArgMatches, name: &str, default: T) -> Result<T> {
    match matches.value_of(name) {
        None => Ok(default),
        Some(s) => T::from_str(s)
            .map_err(|_| MandelError::Config(format!("could not read --{}", name))),
    }
}

fn palette(matches: &ArgMatches, len: usize) -> Result<Palette> {
    match matches.value_of(PALETTE) {
        Some("random") => {
            let mut rng = match matches.value_of(SEED) {
                Some(_) => StdRng::seed_from_u64(number_or(matches, SEED, 0)?),
                None => StdRng::from_entropy(),
            };
            Ok(Palette::random(len, &mut rng))
        }
        _ => {
            if matches.is_present(SEED) {
                warn!("--seed only applies to --palette random; ignoring it");
            }
            Ok(Palette::rainbow())
        }
    }
}

fn run(matches: &ArgMatches) -> Result<()> {
    let (width, height) = pair_of::<usize>(matches, SIZE, 'x')?;
    let (real_start, real_end) = pair_of::<f64>(matches, REAL, ',')?;
    let (imaginary_start, imaginary_end) = pair_of::<f64>(matches, IMAGINARY, ',')?;

    let config = RenderConfig::default()
        .with_viewport(Viewport::new(real_start, real_end, imaginary_start, imaginary_end)?)
        .with_max_iteration(number_or(matches, ITERATIONS, MAX_ITERATION)?)
        .with_threads(number_or(matches, THREADS, num_cpus::get())?)
        .with_scale_factor(number_or(matches, SCALE, SCALE_FACTOR)?);

    let output = matches
        .value_of(OUTPUT)
        .ok_or_else(|| MandelError::Config("no output file".to_string()))?;
    let presenter = if matches.is_present(FRAMES) {
        ImagePresenter::numbered(output)
    } else {
        ImagePresenter::new(output)
    };

    let palette = palette(matches, config.max_iteration)?;
    let mut session = Session::new(&config, palette, presenter, Raster::new(width, height)?)?;
    session.start()?;

    if let Some(clicks) = matches.values_of(CLICK) {
        for click in clicks {
            let (x, y) = parse_pair::<usize>(click, ',')
                .ok_or_else(|| MandelError::Config(format!("could not read click {}", click)))?;
            session.click(Pixel(x, y))?;
        }
    }
    Ok(())
}

fn main() {
    env_logger::init();
    let matches = args();
    if let Err(e) = run(&matches) {
        eprintln!("Render failure: {}", e);
        std::process::exit(1);
    }
}

extern crate clap;
extern crate cmplximage;
extern crate image;
extern crate num;
extern crate num_cpus;

use clap::{App, Arg, ArgMatches};
use cmplximage::{hsl_wheel_map, render_threaded, riemann_map, Color, ComplexRect, PixelGrid};
use image::png::PNGEncoder;
use image::ColorType;
use num::Complex;
use std::fs::File;
use std::path::Path;
use std::str::FromStr;

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

fn parse_complex(s: &str) -> Option<Complex<f64>> {
    match parse_pair(s, ',') {
        Some((re, im)) => Some(Complex { re, im }),
        None => None,
    }
}

fn validate_pair<T: FromStr>(s: &str, separator: char, err: &str) -> Result<(), String> {
    match parse_pair::<T>(s, separator) {
        Some(_) => Ok(()),
        None => Err(err.to_string()),
    }
}

fn validate_size(s: &str) -> Result<(), String> {
    match parse_pair::<usize>(s, 'x') {
        Some((w, h)) if w >= 1 && h >= 1 => Ok(()),
        Some(_) => Err("Image size must be at least 1x1".to_string()),
        None => Err("Could not parse output image size".to_string()),
    }
}

fn validate_range<T: FromStr + Ord>(
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

fn identity(z: Complex<f64>) -> Complex<f64> {
    z
}

fn square(z: Complex<f64>) -> Complex<f64> {
    z * z
}

fn recip(z: Complex<f64>) -> Complex<f64> {
    z.inv()
}

/// exp(1/z), the classic essential singularity at the origin.
fn essential(z: Complex<f64>) -> Complex<f64> {
    z.inv().exp()
}

const OUTPUT: &str = "output";
const SIZE: &str = "size";
const CORNER_A: &str = "corner-a";
const CORNER_B: &str = "corner-b";
const FUNCTION: &str = "function";
const MAP: &str = "map";
const THREADS: &str = "threads";

fn args<'a>() -> ArgMatches<'a> {
    let max_threads = num_cpus::get();

    App::new("cmplxdraw")
        .version("0.1.0")
        .author("Elf M. Sternberg <elf.sternberg@gmail.com>")
        .about("Renders a function of one complex variable as a domain-colored PNG")
        .arg(
            Arg::with_name(OUTPUT)
                .required(true)
                .long(OUTPUT)
                .short("o")
                .takes_value(true)
                .help("Output file"),
        )
        .arg(
            Arg::with_name(SIZE)
                .required(false)
                .long(SIZE)
                .short("s")
                .takes_value(true)
                .default_value("800x800")
                .validator(|s| validate_size(&s))
                .help("Size of output image, in sampling steps per axis"),
        )
        .arg(
            Arg::with_name(CORNER_A)
                .required(false)
                .long(CORNER_A)
                .short("a")
                .takes_value(true)
                .default_value("-1,-1")
                .validator(|s| validate_pair::<f64>(&s, ',', "Could not parse corner"))
                .help("One corner of the domain rectangle, as re,im"),
        )
        .arg(
            Arg::with_name(CORNER_B)
                .required(false)
                .long(CORNER_B)
                .short("b")
                .takes_value(true)
                .default_value("1,1")
                .validator(|s| validate_pair::<f64>(&s, ',', "Could not parse corner"))
                .help("The opposite corner of the domain rectangle, as re,im"),
        )
        .arg(
            Arg::with_name(FUNCTION)
                .required(false)
                .long(FUNCTION)
                .short("f")
                .takes_value(true)
                .default_value("identity")
                .possible_values(&["identity", "square", "recip", "essential"])
                .help("The complex function to render"),
        )
        .arg(
            Arg::with_name(MAP)
                .required(false)
                .long(MAP)
                .short("m")
                .takes_value(true)
                .default_value("riemann")
                .possible_values(&["riemann", "hsl"])
                .help("The coloring scheme"),
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
                .help("Number of threads to use in the sampling loop"),
        )
        .get_matches()
}

fn write_image(outfile: &str, grid: &PixelGrid) -> Result<(), std::io::Error> {
    let path = Path::new(outfile);
    let output = File::create(&path)?;
    let encoder = PNGEncoder::new(output);
    encoder.encode(
        &grid.to_raw(),
        grid.width() as u32,
        grid.height() as u32,
        ColorType::RGBA(8),
    )?;
    Ok(())
}

fn main() {
    let matches = args();
    let image_size: (usize, usize) =
        parse_pair(matches.value_of(SIZE).unwrap(), 'x').expect("Error parsing image dimensions");
    let corner_a =
        parse_complex(matches.value_of(CORNER_A).unwrap()).expect("Error parsing first corner");
    let corner_b =
        parse_complex(matches.value_of(CORNER_B).unwrap()).expect("Error parsing second corner");
    let threads = usize::from_str(matches.value_of(THREADS).unwrap())
        .expect("Could not parse thread count.");
    let domain = ComplexRect::new(corner_a, corner_b);

    let function: fn(Complex<f64>) -> Complex<f64> = match matches.value_of(FUNCTION).unwrap() {
        "square" => square,
        "recip" => recip,
        "essential" => essential,
        _ => identity,
    };
    let colormap: Box<dyn Fn(Complex<f64>) -> Color + Sync> =
        match matches.value_of(MAP).unwrap() {
            "hsl" => Box::new(hsl_wheel_map(function)),
            _ => Box::new(riemann_map(function)),
        };

    match render_threaded(&colormap, image_size.0, image_size.1, domain, threads) {
        Err(e) => {
            eprintln!("Render failure: {}", e);
            std::process::exit(1);
        }
        Ok(grid) => {
            write_image(matches.value_of(OUTPUT).unwrap(), &grid)
                .expect("Could not write output file");
        }
    }
}

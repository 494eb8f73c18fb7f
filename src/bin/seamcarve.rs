// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at http://mozilla.org/MPL/2.0/.

use failure::Error;
use image::Rgb;
use log::{error, info};
use seamcarve::{config, CarveConfig, SeamCarver};
use std::process;

const MARKER: Rgb<u8> = Rgb([255, 0, 0]);

fn run() -> Result<(), Error> {
    let matches = config::app().get_matches();
    let config = CarveConfig::from_matches(&matches)?;

    let image = image::open(&config.input)?.to_rgb();
    let (width, height) = image.dimensions();
    info!("loaded {} ({}x{})", config.input.display(), width, height);
    config.validate(width, height)?;

    let carver = SeamCarver::new(&image);
    let result = if config.mark_only {
        carver.mark_seam(config.mark_orientation(), MARKER)?
    } else {
        carver.carve(config.vertical_seams, config.horizontal_seams)?
    };

    result.save(&config.output)?;
    info!("wrote {} ({}x{})", config.output.display(), result.width(), result.height());
    Ok(())
}

fn main() {
    env_logger::init();
    if let Err(err) = run() {
        error!("{}", err);
        eprintln!("seamcarve: {}", err);
        process::exit(1);
    }
}

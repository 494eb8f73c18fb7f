// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at http://mozilla.org/MPL/2.0/.

//! Command-line configuration
//!
//! The command line is parsed once into a `CarveConfig`, which is then
//! checked against the loaded image before any carving starts.

use crate::errors::CarveError;
use crate::seamcarver::check_removal;
use crate::seamfinder::Orientation;
use clap::{App, Arg, ArgMatches};
use std::path::PathBuf;

#[derive(Debug, Clone, PartialEq)]
pub struct CarveConfig {
    pub input: PathBuf,
    pub output: PathBuf,
    /// Seams to take out top to bottom; each one removes a column.
    pub vertical_seams: u32,
    /// Seams to take out left to right; each one removes a row.
    pub horizontal_seams: u32,
    /// Paint the next seam instead of removing anything.
    pub mark_only: bool,
}

/// The argument parser for the `seamcarve` binary.
pub fn app<'a, 'b>() -> App<'a, 'b> {
    App::new("seamcarve")
        .version("0.1.0")
        .author("Elf M. Sternberg <elf.sternberg@gmail.com>")
        .about("Content-aware image resizing by seam carving")
        .arg(
            Arg::with_name("in")
                .long("in")
                .value_name("FILE")
                .help("The image to carve")
                .takes_value(true)
                .required(true),
        )
        .arg(
            Arg::with_name("out")
                .long("out")
                .value_name("FILE")
                .help("Where to write the result; the extension picks the format")
                .takes_value(true)
                .required(true),
        )
        .arg(
            Arg::with_name("width")
                .long("width")
                .value_name("N")
                .help("Number of vertical seams to remove")
                .takes_value(true)
                .allow_hyphen_values(true),
        )
        .arg(
            Arg::with_name("height")
                .long("height")
                .value_name("N")
                .help("Number of horizontal seams to remove")
                .takes_value(true)
                .allow_hyphen_values(true),
        )
        .arg(
            Arg::with_name("mark")
                .long("mark")
                .help("Paint the next seam in red instead of removing seams"),
        )
}

fn seam_count(matches: &ArgMatches, name: &str) -> Result<u32, CarveError> {
    match matches.value_of(name) {
        None => Ok(0),
        Some(value) => value.parse().map_err(|_| CarveError::InvalidArgument {
            name: name.to_string(),
            value: value.to_string(),
        }),
    }
}

fn path(matches: &ArgMatches, name: &str) -> Result<PathBuf, CarveError> {
    matches
        .value_of_os(name)
        .map(PathBuf::from)
        .ok_or_else(|| CarveError::MissingArgument(name.to_string()))
}

impl CarveConfig {
    pub fn from_matches(matches: &ArgMatches) -> Result<Self, CarveError> {
        Ok(CarveConfig {
            input: path(matches, "in")?,
            output: path(matches, "out")?,
            vertical_seams: seam_count(matches, "width")?,
            horizontal_seams: seam_count(matches, "height")?,
            mark_only: matches.is_present("mark"),
        })
    }

    /// Check the request against the dimensions of the loaded image.
    pub fn validate(&self, width: u32, height: u32) -> Result<(), CarveError> {
        if self.mark_only {
            check_removal(width, height, 0, 0)
        } else {
            check_removal(width, height, self.vertical_seams, self.horizontal_seams)
        }
    }

    /// Which seam `--mark` paints: vertical, unless only horizontal
    /// seams were asked for.
    pub fn mark_orientation(&self) -> Orientation {
        if self.vertical_seams == 0 && self.horizontal_seams > 0 {
            Orientation::Horizontal
        } else {
            Orientation::Vertical
        }
    }
}

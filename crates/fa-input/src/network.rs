//! Link-length loader.
//!
//! ```csv
//! link_id,length_m
//! link_12,300
//! ```

use std::io::Read;
use std::path::Path;

use serde::Deserialize;

use fa_core::{LinkNetwork, LinkNetworkBuilder};

use crate::InputResult;

#[derive(Deserialize)]
struct LinkRecord {
    link_id:  String,
    length_m: f64,
}

pub fn load_network_csv(path: &Path) -> InputResult<LinkNetwork> {
    load_network_reader(std::fs::File::open(path)?)
}

pub fn load_network_reader<R: Read>(reader: R) -> InputResult<LinkNetwork> {
    let mut builder = LinkNetworkBuilder::new();
    for result in csv::Reader::from_reader(reader).deserialize::<LinkRecord>() {
        let r = result?;
        builder.add_link(r.link_id, r.length_m)?;
    }
    Ok(builder.build())
}

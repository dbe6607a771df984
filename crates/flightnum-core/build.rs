// Copyright (c) 2025 Felix Kahle.
//
// Permission is hereby granted, free of charge, to any person obtaining
// a copy of this software and associated documentation files (the
// "Software"), to deal in the Software without restriction, including
// without limitation the rights to use, copy, modify, merge, publish,
// distribute, sublicense, and/or sell copies of the Software, and to
// permit persons to whom the Software is furnished to do so, subject to
// the following conditions:
//
// The above copyright notice and this permission notice shall be
// included in all copies or substantial portions of the Software.
//
// THE SOFTWARE IS PROVIDED "AS IS", WITHOUT WARRANTY OF ANY KIND,
// EXPRESS OR IMPLIED, INCLUDING BUT NOT LIMITED TO THE WARRANTIES OF
// MERCHANTABILITY, FITNESS FOR A PARTICULAR PURPOSE AND
// NONINFRINGEMENT. IN NO EVENT SHALL THE AUTHORS OR COPYRIGHT HOLDERS BE
// LIABLE FOR ANY CLAIM, DAMAGES OR OTHER LIABILITY, WHETHER IN AN ACTION
// OF CONTRACT, TORT OR OTHERWISE, ARISING FROM, OUT OF OR IN CONNECTION
// WITH THE SOFTWARE OR THE USE OR OTHER DEALINGS IN THE SOFTWARE.

use std::env;
use std::fmt::Display;

/// Emits a build diagnostic visible in the cargo output.
fn warning(msg: impl Display) {
    println!("cargo:warning=flightnum: {msg}");
}

fn main() {
    println!("cargo:rerun-if-changed=build.rs");
    println!("cargo:rustc-check-cfg=cfg(flightnum_word_bits, values(\"16\", \"32\", \"64\"))");
    println!("cargo:rustc-check-cfg=cfg(flightnum_big_endian)");

    let word_bits = match env::var("CARGO_CFG_TARGET_POINTER_WIDTH").as_deref() {
        Ok(bits @ ("16" | "32" | "64")) => bits.to_owned(),
        Ok(other) => {
            warning(format!(
                "unsupported target word width `{other}`; defaulting to 32-bit words"
            ));
            String::from("32")
        }
        Err(_) => {
            warning("target word width unknown; defaulting to 32-bit words");
            String::from("32")
        }
    };
    println!("cargo:rustc-cfg=flightnum_word_bits=\"{word_bits}\"");

    match env::var("CARGO_CFG_TARGET_ENDIAN").as_deref() {
        Ok("big") => println!("cargo:rustc-cfg=flightnum_big_endian"),
        Ok("little") => {}
        _ => warning("target byte order unknown; defaulting to little-endian"),
    }

    let ones_complement = env::var_os("CARGO_FEATURE_ONES_COMPLEMENT").is_some();
    let sign_magnitude = env::var_os("CARGO_FEATURE_SIGN_MAGNITUDE").is_some();
    if ones_complement && sign_magnitude {
        warning("both `ones-complement` and `sign-magnitude` are enabled; using one's-complement");
    }

    if env::var_os("CARGO_FEATURE_NON_IEEE_FLOAT").is_some() {
        warning(
            "non-IEEE-754 float representation selected; float classification \
             returns conservative defaults and NaN/Inf are never produced",
        );
    }
}

#![allow(dead_code)]

use embody::{ModuleDescriptor, Parameter, Signature};
use std::fs;
use std::path::Path;

/// Reads a golden file from `tests/expected`.
pub fn expected(name: &str) -> String {
    read(Path::new(env!("CARGO_MANIFEST_DIR")).join("tests/expected").join(name))
}

/// Path of an input file in `tests/data`.
pub fn data_path(name: &str) -> std::path::PathBuf {
    Path::new(env!("CARGO_MANIFEST_DIR")).join("tests/data").join(name)
}

pub fn read<P: AsRef<Path>>(path: P) -> String {
    let path = path.as_ref();
    fs::read_to_string(path).unwrap_or_else(|e| panic!("failed to read {}: {e}", path.display()))
}

/// Prints both texts line by line before failing, so whitespace differences are visible.
pub fn assert_text_eq(actual: &str, expected: &str) {
    if actual != expected {
        println!("=== actual ===\n{actual:?}\n=== expected ===\n{expected:?}");
        for (idx, (a, e)) in actual.lines().zip(expected.lines()).enumerate() {
            if a != e {
                println!(
                    "first difference on line {}:\n  actual:   {a:?}\n  expected: {e:?}",
                    idx + 1
                );
                break;
            }
        }
        panic!("rendered text differs from expected");
    }
}

fn params(params: &[(&str, &str)]) -> Vec<Parameter> {
    params.iter().map(|(ty, name)| Parameter::new(*ty, *name)).collect()
}

/// The fully populated module used by the golden files.
pub fn filled_descriptor() -> ModuleDescriptor {
    ModuleDescriptor::new("Filled", "Spencer Russell", 2015)
        .with_system_include("stdio.h")
        .with_system_include("stdbool.h")
        .with_project_include("OtherModule.h")
        .with_define("BUFLEN", "32")
        .with_define("PI", "3.14159")
        .with_type("typedef struct {\n    float x;\n    float y;\n} point2")
        .with_exported(Signature::new(
            "point2",
            "point2_add",
            params(&[("point2", "p1"), ("point2", "p2")]),
        ))
        .with_exported(Signature::new("float", "point2_length", params(&[("point2", "p")])))
        .with_exported(Signature::new(
            "void",
            "fill_point2",
            params(&[("point2 *", "p"), ("float", "x"), ("float", "y")]),
        ))
        .with_exported(Signature::new("void", "noop", [Parameter::void()]))
        .with_exported(Signature::new("void *", "something", params(&[("void *", "thing")])))
        .with_static(Signature::new("void", "process", [Parameter::void()]))
        .with_static(Signature::new("int *", "intfunc", params(&[("float", "x")])))
}

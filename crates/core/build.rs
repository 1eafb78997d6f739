use std::{f64::consts::PI, fs, path::PathBuf};

/// Fixed-point scale of the trig tables.
const KOEF: f64 = 256.0;

fn generate_table(name: &str, f: fn(f64) -> f64) -> String {
    let mut out = String::new();

    out.push_str(&format!("static {}: [i32; 360] = [\n", name));

    for row in 0..36 {
        out.push_str("   ");
        for col in 0..10 {
            let degrees = f64::from(row * 10 + col);
            // `as` truncates toward zero, which is the rounding the table is defined with
            let value = (KOEF * f(PI * degrees / 180.0)) as i32;
            out.push_str(&format!(" {},", value));
        }
        out.push('\n');
    }

    out.push_str("];\n");

    out
}

fn main() {
    let mut output = String::new();
    output.push_str(&generate_table("SIN256", f64::sin));
    output.push_str(&generate_table("COS256", f64::cos));

    let out_dir = PathBuf::from(std::env::var("OUT_DIR").unwrap());
    fs::write(out_dir.join("trig_table.rs"), output).unwrap();

    println!("cargo:rerun-if-changed=build.rs");
}

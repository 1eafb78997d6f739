use std::{fs, path::PathBuf};

/// First character code in the catalog (ASCII space).
const FIRST_CODE: u32 = 0x20;

struct Catalog {
    standard: Vec<u32>,
    classic: Vec<u32>,
}

fn parse_hex(token: &str, lineno: usize) -> Result<u32, String> {
    let digits = token
        .strip_prefix("0x")
        .ok_or_else(|| format!("Expected hex number at line {}", lineno + 1))?;
    u32::from_str_radix(digits, 16)
        .map_err(|_| format!("Invalid hex number at line {}", lineno + 1))
}

fn parse_catalog(input: &str) -> Result<Catalog, String> {
    let mut standard: Vec<Option<u32>> = Vec::new();
    let mut overrides = Vec::new();

    for (lineno, line) in input.lines().enumerate() {
        let line = line.split('#').next().unwrap_or("");
        let parts: Vec<&str> = line.split_whitespace().collect();
        if parts.is_empty() {
            continue;
        }

        let code = parse_hex(parts[0], lineno)?;
        let mask = parts
            .get(1)
            .ok_or_else(|| format!("Missing mask at line {}", lineno + 1))
            .and_then(|token| parse_hex(token, lineno))?;

        let idx = code
            .checked_sub(FIRST_CODE)
            .ok_or_else(|| format!("Code below 0x20 at line {}", lineno + 1))? as usize;

        match parts.get(2) {
            None => {
                if standard.len() <= idx {
                    standard.resize(idx + 1, None);
                }
                if standard[idx].replace(mask).is_some() {
                    return Err(format!("Duplicate code {:#x} at line {}", code, lineno + 1));
                }
            }
            Some(&"classic") => overrides.push((idx, mask)),
            Some(tag) => return Err(format!("Unknown tag {} at line {}", tag, lineno + 1)),
        }
    }

    let standard = standard
        .iter()
        .enumerate()
        .map(|(idx, mask)| {
            mask.ok_or_else(|| format!("Missing code {:#x}", idx as u32 + FIRST_CODE))
        })
        .collect::<Result<Vec<_>, _>>()?;

    let mut classic = standard.clone();
    for (idx, mask) in overrides {
        let entry = classic.get_mut(idx).ok_or_else(|| {
            format!(
                "Classic override for unknown code {:#x}",
                idx as u32 + FIRST_CODE
            )
        })?;
        *entry = mask;
    }

    Ok(Catalog { standard, classic })
}

fn generate_table(name: &str, masks: &[u32]) -> String {
    let mut out = String::new();

    out.push_str(&format!("static {}: [u32; GLYPH_COUNT] = [\n", name));

    for (idx, mask) in masks.iter().enumerate() {
        out.push_str(&format!(
            "    {:#010X}, // {:#04x}\n",
            mask,
            idx as u32 + FIRST_CODE
        ));
    }

    out.push_str("];\n");

    out
}

fn main() {
    let catalog = parse_catalog(&fs::read_to_string("data/seg32.txt").unwrap()).unwrap();

    let mut out = String::new();
    out.push_str(&format!(
        "/// Number of glyphs in the catalog.\npub const GLYPH_COUNT: usize = {};\n",
        catalog.standard.len()
    ));
    out.push_str(&generate_table("STANDARD_GLYPHS", &catalog.standard));
    out.push_str(&generate_table("CLASSIC_GLYPHS", &catalog.classic));

    let out_dir = PathBuf::from(std::env::var("OUT_DIR").unwrap());
    fs::write(out_dir.join("seg32_glyphs.rs"), out).unwrap();

    println!("cargo:rerun-if-changed=data/seg32.txt");
}

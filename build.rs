use std::path::Path;

const REQUIRED_ORGANISMS: [&str; 2] = ["human", "mouse"];

fn main() {
    let table_path = Path::new("references/gene_names.json");
    validate_gene_table_file(table_path);
    set_build_dependencies();
}

fn validate_gene_table_file(table_path: &Path) {
    // Ensure the gene table exists at build time
    assert!(
        table_path.exists(),
        "\n\nGENE TABLE BUILD ERROR: File not found\n\
         Path: {}\n\
         Please create the gene name table before building.\n",
        table_path.display()
    );

    let contents = std::fs::read_to_string(table_path).unwrap_or_else(|e| {
        panic!(
            "\n\nGENE TABLE BUILD ERROR: Failed to read file\n\
             Path: {}\n\
             Error: {e}\n",
            table_path.display()
        );
    });

    let table: serde_json::Value = serde_json::from_str(&contents).unwrap_or_else(|e| {
        panic!(
            "\n\nGENE TABLE BUILD ERROR: Invalid JSON\n\
             Path: {}\n\
             Error: {e}\n\
             Hint: Check for missing commas, brackets, or invalid syntax.\n",
            table_path.display()
        );
    });

    validate_gene_table_structure(&table);
}

fn validate_gene_table_structure(table: &serde_json::Value) {
    assert!(
        table.is_object(),
        "\n\nGENE TABLE BUILD ERROR: Root must be a JSON object\n"
    );

    assert!(
        table.get("version").and_then(|v| v.as_str()).is_some(),
        "\n\nGENE TABLE BUILD ERROR: Missing string 'version' field\n"
    );

    let organisms = table
        .get("organisms")
        .and_then(|o| o.as_object())
        .unwrap_or_else(|| {
            panic!(
                "\n\nGENE TABLE BUILD ERROR: Missing 'organisms' object\n\
                 The table must map organism names to vendor/canonical gene name pairs.\n"
            );
        });

    let mut total_names = 0;
    for organism in REQUIRED_ORGANISMS {
        let names = organisms
            .get(organism)
            .and_then(|n| n.as_object())
            .unwrap_or_else(|| {
                panic!("\n\nGENE TABLE BUILD ERROR: Missing gene names for organism '{organism}'\n");
            });
        validate_gene_names(organism, names);
        total_names += names.len();
    }

    println!(
        "cargo:warning=Validated gene table: {} organisms, {total_names} vendor gene names",
        organisms.len()
    );
}

fn validate_gene_names(organism: &str, names: &serde_json::Map<String, serde_json::Value>) {
    for (vendor, canonical) in names {
        let canonical = canonical.as_str().unwrap_or_else(|| {
            panic!(
                "\n\nGENE TABLE BUILD ERROR: '{vendor}' ({organism}) must map to a string\n"
            );
        });

        // Canonical names always carry an allele, e.g. TRBV7-2*01
        assert!(
            canonical.starts_with("TR") && canonical.contains('*'),
            "\n\nGENE TABLE BUILD ERROR: '{vendor}' ({organism}) maps to '{canonical}'\n\
             Canonical names must be IMGT names with an allele suffix.\n"
        );
    }
}

fn set_build_dependencies() {
    // Tell cargo to rerun if the gene table changes
    println!("cargo:rerun-if-changed=references/gene_names.json");

    // Tell cargo to rerun if build.rs changes
    println!("cargo:rerun-if-changed=build.rs");
}

//! Library-level conversion tests
//!
//! These tests go from raw delimited text through detection and conversion
//! without touching the filesystem.

use tcr_converter::parsing::delimited::{read_table_from, write_table_to};
use tcr_converter::{
    convert, detect, Chain, ConvertError, ConvertOptions, GeneTable, Organism, RawTable,
    SourceFormat, Value,
};

fn load(text: &str, delimiter: u8) -> RawTable {
    read_table_from(text.as_bytes(), delimiter).expect("table should parse")
}

fn detect_table(table: &RawTable) -> SourceFormat {
    detect(table.columns().iter().map(String::as_str)).expect("format should be detected")
}

fn adaptive_row(identity: &str) -> String {
    format!(
        "rearrangement\tbio_identity\tproductive_frequency\ttemplates\nTGTGCC\t{identity}\t0.5\t3\n"
    )
}

#[test]
fn test_unresolvable_gene_keeps_row() {
    let genes = GeneTable::load_embedded().unwrap();
    let options = ConvertOptions::new(Chain::Beta, Organism::Human);
    let table = load(&adaptive_row("CASSF+TCRBVXX-99+TCRBJ02-01"), b'\t');

    let conversion = convert(detect_table(&table), &table, &options, &genes).unwrap();
    assert_eq!(conversion.table.len(), table.len());
    assert_eq!(conversion.unresolved_genes, 1);
    assert!(conversion.table.get(0, "v_b_gene").is_none());
    assert_eq!(
        conversion.table.get(0, "j_b_gene"),
        Some(&Value::text("TRBJ2-1*01"))
    );
}

#[test]
fn test_invalid_cdr3_drops_exactly_one_row() {
    let genes = GeneTable::load_embedded().unwrap();
    let options = ConvertOptions::new(Chain::Beta, Organism::Human);
    let text = "\
rearrangement\tbio_identity\tproductive_frequency\ttemplates
TGT\tCASSF+TCRBV07-02+TCRBJ02-01\t0.5\t3
TGT\tCASS_F+TCRBV07-02+TCRBJ02-01\t0.2\t1
TGT\tCASRF+TCRBV07-02+TCRBJ02-01\t0.3\t2
";
    let table = load(text, b'\t');

    let conversion = convert(detect_table(&table), &table, &options, &genes).unwrap();
    assert_eq!(conversion.table.len(), table.len() - 1);
    assert_eq!(conversion.dropped_rows, 1);
}

#[test]
fn test_malformed_identity_keeps_cdr3_only() {
    let genes = GeneTable::load_embedded().unwrap();
    let options = ConvertOptions::new(Chain::Beta, Organism::Human);
    let table = load(&adaptive_row("CASSF+TCRBV07-02"), b'\t');

    let conversion = convert(SourceFormat::AdaptiveV4, &table, &options, &genes).unwrap();
    assert_eq!(conversion.table.len(), 1);
    assert_eq!(
        conversion.table.get(0, "cdr3_b_aa"),
        Some(&Value::text("CASSF"))
    );
    assert!(conversion.table.get(0, "v_b_gene").is_none());
    assert!(conversion.table.get(0, "j_b_gene").is_none());
}

#[test]
fn test_airr_gamma_chain_columns() {
    let options = ConvertOptions::new(Chain::Gamma, Organism::Human);
    let text = "junction_aa,v_call,j_call,junction\nCATWDF,TRGV9*00,TRGJP*01,TGTGCC\n";
    let table = load(text, b',');

    let conversion = convert(detect_table(&table), &table, &options, &GeneTable::new()).unwrap();
    assert_eq!(
        conversion.table.columns(),
        ["cdr3_g_aa", "v_g_gene", "j_g_gene", "cdr3_g_nucseq"]
    );
    assert_eq!(
        conversion.table.get(0, "v_g_gene"),
        Some(&Value::text("TRGV9*01"))
    );
}

#[test]
fn test_missing_extra_column() {
    let options =
        ConvertOptions::new(Chain::Beta, Organism::Human).with_extra_columns(["subject"]);
    let text = "junction_aa,v_call,j_call,junction\nCASSF,TRBV1*01,TRBJ1-1*01,TGT\n";
    let table = load(text, b',');

    let err = convert(SourceFormat::Airr, &table, &options, &GeneTable::new()).unwrap_err();
    assert!(matches!(err, ConvertError::MissingColumn { ref column, .. } if column == "subject"));
}

#[test]
fn test_converted_table_writes_canonical_header() {
    let options = ConvertOptions::new(Chain::Delta, Organism::Human);
    let text = "junction_aa\tv_call\tj_call\tjunction\nCALGELF\tTRDV2*01\tTRDJ1*00\tTGTGCC\n";
    let table = load(text, b'\t');
    let conversion = convert(SourceFormat::Airr, &table, &options, &GeneTable::new()).unwrap();

    let mut buffer = Vec::new();
    write_table_to(&mut buffer, &conversion.table, b',').unwrap();
    assert_eq!(
        String::from_utf8(buffer).unwrap(),
        "cdr3_d_aa,v_d_gene,j_d_gene,cdr3_d_nucseq\nCALGELF,TRDV2*01,TRDJ1*01,TGTGCC\n"
    );
}

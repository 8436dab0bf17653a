use shared_types::*;
use std::fs;
use std::path::Path;
use ts_rs::TS;

fn main() -> Result<(), Box<dyn std::error::Error>> {
    // Generate TypeScript definitions for API types
    let mut types = Vec::new();

    // Contact types
    types.push(clean_type(ContactMethodType::export_to_string()?));
    types.push(clean_type(ContactMethod::export_to_string()?));
    types.push(clean_type(ExistingContactSummary::export_to_string()?));

    // Candidate types
    types.push(clean_type(CandidateEmail::export_to_string()?));
    types.push(clean_type(CandidatePhone::export_to_string()?));
    types.push(clean_type(MatchCandidate::export_to_string()?));

    // Import listing types
    types.push(clean_type(SuggestedMatch::export_to_string()?));
    types.push(clean_type(ListImportCandidatesRequest::export_to_string()?));
    types.push(clean_type(ImportCandidateResponse::export_to_string()?));
    types.push(clean_type(ImportCandidatesResponse::export_to_string()?));

    let output_dir = Path::new("../frontend/src/api-types");
    fs::create_dir_all(output_dir)?;

    let output_path = output_dir.join("types.ts");
    let output = types.join("\n\n");

    fs::write(&output_path, output)?;
    println!("Generated TypeScript types in {}", output_path.display());

    Ok(())
}

fn clean_type(mut type_def: String) -> String {
    type_def.retain(|c| c != '\r');

    // All types land in one file, so cross-type imports are dropped
    let filtered: Vec<&str> = type_def
        .lines()
        .filter(|line| {
            let trimmed = line.trim();
            !trimmed.starts_with("import type")
                && !trimmed.starts_with("// This file was generated")
                && !trimmed.starts_with("/* This file was generated")
        })
        .collect();

    let result = filtered.join("\n").trim().to_string();
    if result.is_empty() {
        result
    } else {
        format!("{}\n", result)
    }
}

use std::env;
use std::fs;
use subrip::{SubripFile, SubripResult, TimelinePolicy};

fn main() {
    println!("🎬 SubRip Rebuild - Parse and Re-render");
    println!("=======================================");

    let args: Vec<String> = env::args().collect();
    if args.len() < 2 {
        println!("Usage: srt_rebuild <file.srt> [from] [to] [--strict]");
        println!("Example: srt_rebuild tests/testdata/sample.srt 0 2");
        return;
    }
    let file_path = &args[1];
    let strict = args.iter().any(|a| a == "--strict");
    let bounds: Vec<i64> = args[2..]
        .iter()
        .filter_map(|a| a.parse::<i64>().ok())
        .collect();

    match rebuild(file_path, strict, &bounds) {
        Ok(true) => println!("\n✅ Rebuild completed successfully"),
        Ok(false) => println!("\n⚠️  {} is not a SubRip file", file_path),
        Err(e) => println!("\n❌ Rebuild failed: {}", e),
    }
}

fn rebuild(path: &str, strict: bool, bounds: &[i64]) -> SubripResult<bool> {
    let content = fs::read_to_string(path)?;
    let policy = if strict {
        TimelinePolicy::Strict
    } else {
        TimelinePolicy::Repair
    };

    println!("📄 File: {}", path);
    println!("📏 Size: {} bytes", content.len());

    let mut file = SubripFile::with_content(content).with_policy(policy);
    let Some(count) = file.parse()? else {
        return Ok(false);
    };

    println!("📝 Cues: {}", count);
    if let Some(ending) = file.detected_line_ending() {
        println!("↩️  Line ending: {:?}", ending);
    }
    if let (Some(first), Some(last)) = (file.first_cue(), file.last_cue()) {
        println!("⏱️  Span: {} --> {}", first.start, last.end);
    }
    println!();

    let from = bounds.first().copied().unwrap_or(0);
    let to = bounds.get(1).copied().unwrap_or(count as i64 - 1);
    print!("{}", file.build_range(from, to));

    Ok(true)
}

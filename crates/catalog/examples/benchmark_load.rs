use catalog::MovieIndex;
use std::path::Path;
use std::time::Instant;

fn main() {
    let data_dir = Path::new("data");

    println!("Loading catalog artifacts...\n");

    let start = Instant::now();
    let index = MovieIndex::load_from_files(data_dir)
        .expect("Failed to load artifacts");
    let elapsed = start.elapsed();

    let movies = index.len();

    println!("\n=== Load Complete ===");
    println!("Time taken: {:?}", elapsed);
    println!("Movies: {}", movies);
    println!("Similarity rows: {}", movies);
    println!("\nPerformance: {:.0} movies/second",
             movies as f64 / elapsed.as_secs_f64());
}

use blockgen_core::{MarkovChain, Start, trim_to_natural_ending};

/// Sample text the chains are drawn from. Any source works here: a file
/// read, an HTTP fetch, or a hardcoded string like this one.
const SAMPLE: &str = "\
	It was a bright morning in the quiet village. The baker opened his \
	shop before the sun had cleared the hills. His bread was famous in \
	the quiet village, and travelers often stopped to buy a warm loaf. \
	One traveler asked the baker for his secret. The baker smiled and \
	said nothing! Was the secret in the flour? Was it in the oven that \
	his father had built long ago? Nobody ever learned the answer. The \
	village kept its small mystery, and the bread stayed famous.";

fn main() -> Result<(), Box<dyn std::error::Error>> {
	// Build a generator with the default configuration:
	// two-word blocks, case-insensitive lookup
	let chain = MarkovChain::from_sample(SAMPLE);

	// The usual call: start from a sentence beginning sampled from the
	// text, so the output opens like a natural sentence
	let text = chain.generate(10, Start::SentenceBeginning)?;
	println!("Sentence start: {text}");

	// Start from a uniformly random block instead
	let text = chain.generate(10, Start::Random)?;
	println!("Random start:   {text}");

	// Force the chain to begin with a block containing a given word.
	// Lookup is case-insensitive here, so "THE" matches "The" and "the"
	let text = chain.generate(10, Start::Literal("THE".to_owned()))?;
	println!("Literal start:  {text}");

	// A literal absent from the sample is the one generation error;
	// callers must be prepared to handle it
	match chain.generate(10, Start::Literal("spaceship".to_owned())) {
		Ok(_) => println!("Should not happen"),
		Err(e) => println!("Literal miss:   {e}"),
	}

	// Generated chains usually stop mid-sentence; trim back to the last
	// complete sentence for display
	let text = chain.generate(15, Start::SentenceBeginning)?;
	println!("Trimmed:        {}", trim_to_natural_ending(&text));

	// A custom configuration: three-word blocks, case-sensitive lookup
	let precise = MarkovChain::new(SAMPLE, 3, false)?;
	let text = precise.generate(6, Start::Literal("baker".to_owned()))?;
	println!("Three-word:     {text}");

	Ok(())
}

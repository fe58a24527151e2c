use conneg::media_type_matches;

#[test]
fn test_matches() {
	let cases: &[(&str, &[&str])] = &[
		(
			"application/example+json; charset=utf-8",
			&["application/example+json"],
		),
		(
			"application/example+json;charset=utf-8",
			&["application/example+json"],
		),
		("application/example+json", &["application/example+json"]),
		("application/example", &["application/example"]),
		("application/example", &["application/*"]),
		("application/example", &["*/*"]),
		(
			"text/html",
			&["application/json", "text/*", "image/png"],
		),
	];

	for (media_type, types) in cases {
		assert!(
			media_type_matches(media_type, types),
			"expected {media_type:?} to match {types:?}",
		);
	}
}

#[test]
fn test_non_matches() {
	let cases: &[(&str, &[&str])] = &[
		(
			"application/example; charset-utf-8",
			&["application/example; charset=utf-8"],
		),
		// Directives are only stripped from the probed value, and
		// whitespace is never trimmed.
		("application/example ;charset-utf-8", &["application/example"]),
		("application/example", &["application/example; charset=utf-8"]),
		("application/example", &["application/example+json"]),
		("application/example+json", &["application/example"]),
		("application/example", &["example/*"]),
		("", &["example/*"]),
		("", &[""]),
		("application/example", &[]),
		("application/example ", &["application/example"]),
		(" application/example", &["application/example"]),
		("application/example", &[" application/example"]),
		("application/example", &["application/example "]),
		// Case-sensitive at this layer.
		("Application/Example", &["application/example"]),
	];

	for (media_type, types) in cases {
		assert!(
			!media_type_matches(media_type, types),
			"expected {media_type:?} not to match {types:?}",
		);
	}
}

use super::Dirty;

#[test]
fn none_is_the_empty_default() {
	assert!(Dirty::NONE.is_empty());
	assert_eq!(Dirty::default(), Dirty::NONE);
}

#[test]
fn flags_accumulate_across_messages() {
	let mut dirty = Dirty::NONE;
	dirty |= Dirty::CONTENT;
	dirty |= Dirty::TABS;
	assert!(dirty.contains(Dirty::CONTENT | Dirty::TABS));
	assert!(!dirty.contains(Dirty::THEME));
}

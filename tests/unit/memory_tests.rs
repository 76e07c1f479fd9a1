/*!
 * Tests for the Arabic translation memory
 */

use chatlingo::translation::TranslationMemory;
use chatlingo::translation::memory::normalize_term;

#[test]
fn test_normalizeTerm_shouldFoldKnownVariants() {
    assert_eq!(normalize_term("Ex-Factory"), "ex factory");
    assert_eq!(normalize_term(" Ex Works "), "ex factory");
    assert_eq!(normalize_term("Telegraphic Transfer"), "tt");
    assert_eq!(normalize_term("Quotation"), "quotation");
}

#[test]
fn test_applyToArabic_withSeveralTerms_shouldReplaceAll() {
    let memory = TranslationMemory::default();
    let (result, applied) = memory.apply_to_arabic("Sample و Quotation");
    assert_eq!(result, "العينة و عرض الأسعار");
    assert_eq!(applied.len(), 2);
}

#[test]
fn test_addEntry_shouldBeVisibleThroughClones() {
    let memory = TranslationMemory::default();
    let shared = memory.clone();
    shared.add_entry("letter of credit", Some("خطاب الاعتماد"));

    assert_eq!(memory.lookup("lc").as_deref(), Some("خطاب الاعتماد"));
    assert!(memory.stats().terms.contains(&"lc".to_string()));
}

#[test]
fn test_reverseLookup_withOverlappingTerms_shouldPreferLongestArabic() {
    let memory = TranslationMemory::default();
    let (result, _) = memory.reverse_lookup("السعر بالتاكا البنغلاديشي");
    assert_eq!(result, "price in bdt");
}

#[test]
fn test_addEntry_withEmptyArabic_shouldNotDeleteTermFromOutput() {
    let memory = TranslationMemory::default();
    memory.add_entry("FOB", Some(""));

    assert_eq!(memory.lookup("FOB").as_deref(), Some("FOB"));
    let (result, _) = memory.apply_to_arabic("Price FOB Chittagong");
    assert_eq!(result, "Price FOB Chittagong");
    assert_eq!(memory.stats().arabic_translations, memory.stats().total_terms);
}

#[test]
fn test_applyToArabic_withTermInsidePlaceholder_shouldLeavePlaceholderIntact() {
    let memory = TranslationMemory::default();
    memory.add_entry("preserved", Some("محفوظ"));
    memory.add_entry("Preserved field", Some("حقل محفوظ"));

    let (result, applied) = memory.apply_to_arabic(r#"السعر BDT name_ar: "[PRESERVED]""#);

    assert_eq!(result, r#"السعر تاكا بنغلاديشي name_ar: "[PRESERVED]""#);
    assert_eq!(applied.len(), 1);
}

mod utils;

#[cfg(test)]
mod tests {
    use crate::utils::{assert_text_eq, data_path, expected, filled_descriptor, read};
    use embody::descriptor::load_descriptor;
    use embody::renderer::include_guard;
    use embody::signature::extract;
    use embody::{FakeRequest, Generator, ModuleDescriptor, Signature, TestVariant};
    use test_log::test;

    fn generator() -> Generator {
        Generator::new().unwrap()
    }

    #[test]
    fn test_filled_header() {
        let descriptor = filled_descriptor().with_include_guard(true);
        let rendered = generator().render_header(&descriptor, "Filled.h").unwrap();
        assert_text_eq(&rendered, &expected("Filled.h"));
    }

    #[test]
    fn test_filled_source() {
        let rendered = generator().render_source(&filled_descriptor(), "Filled.c").unwrap();
        assert_text_eq(&rendered, &expected("Filled.c"));
    }

    #[test]
    fn test_empty_header() {
        let descriptor =
            ModuleDescriptor::new("Empty", "Spencer Russell", 2015).with_include_guard(true);
        let rendered = generator().render_header(&descriptor, "Empty.h").unwrap();
        assert_text_eq(&rendered, &expected("Empty.h"));
    }

    #[test]
    fn test_empty_source() {
        let descriptor = ModuleDescriptor::new("Empty", "Spencer Russell", 2015);
        let rendered = generator().render_source(&descriptor, "Empty.c").unwrap();
        assert_text_eq(&rendered, &expected("Empty.c"));
    }

    #[test]
    fn test_descriptor_file_renders_like_the_builder() {
        let loaded = load_descriptor(data_path("filled.yaml")).unwrap();
        let from_file = generator().render_source(&loaded, "Filled.c").unwrap();
        assert_text_eq(&from_file, &expected("Filled.c"));
    }

    #[test]
    fn test_minimal_test_skeleton() {
        let rendered = generator().render_test(&filled_descriptor(), TestVariant::Minimal).unwrap();
        assert_text_eq(&rendered, &expected("FilledTest.cpp"));
    }

    #[test]
    fn test_full_test_skeleton() {
        let mut descriptor = filled_descriptor();
        descriptor.project_name = Some("Blinky".to_string());
        descriptor.copyright_holder = Some("MIT Media Lab".to_string());
        let rendered = generator().render_test(&descriptor, TestVariant::Full).unwrap();
        assert_text_eq(&rendered, &expected("FilledTestFull.cpp"));
    }

    #[test]
    fn test_fake_from_header() {
        let header = read(data_path("FakeSpec.h"));
        let (request, skipped) = FakeRequest::from_header("FakeSpec.h", &header);
        assert!(skipped.is_empty());
        let rendered = generator().render_fake(&request).unwrap();
        assert_text_eq(&rendered, &expected("FakeFakeSpec.c"));
    }

    #[test]
    fn test_header_round_trips_through_the_extractor() {
        let descriptor = filled_descriptor().with_include_guard(true);
        let header = generator().render_header(&descriptor, "Filled.h").unwrap();

        let extraction = extract(&header);
        assert!(extraction.skipped.is_empty());
        assert_eq!(extraction.signatures, descriptor.exported_functions);

        let fake = generator()
            .render_fake(&FakeRequest::new("Filled.h", extraction.signatures))
            .unwrap();
        for signature in &descriptor.exported_functions {
            assert!(fake.contains(&format!("{signature} {{\n}}")));
        }
    }

    #[test]
    fn test_extracting_pointer_prototype() {
        let extraction = extract("void *something(void *thing);");
        let expected: Signature = "void *something(void *thing)".parse().unwrap();
        assert_eq!(extraction.signatures, vec![expected]);
        assert_eq!(extraction.signatures[0].return_type(), "void *");
        assert_eq!(extraction.signatures[0].parameters()[0].ty(), "void *");
        assert_eq!(extraction.signatures[0].parameters()[0].name(), "thing");
    }

    #[test]
    fn test_omits_empty_sections() {
        let mut descriptor = filled_descriptor().with_include_guard(true);
        descriptor.system_includes.clear();
        descriptor.project_includes.clear();
        descriptor.defines.clear();
        descriptor.types.clear();
        descriptor.static_functions.clear();

        let header = generator().render_header(&descriptor, "Filled.h").unwrap();
        let source = generator().render_source(&descriptor, "Filled.c").unwrap();
        for text in [&header, &source] {
            assert!(!text.contains("Includes"));
            assert!(!text.contains("Defines and Types"));
            assert!(!text.contains("Static Function"));
            assert!(!text.contains("\n\n\n"));
        }
    }

    #[test]
    fn test_guard_tokens_match() {
        for filename in ["Filled.h", "drivers/uart-v2.h", "odd name.hpp", "Filled"] {
            let descriptor = ModuleDescriptor::new("M", "a", 2015).with_include_guard(true);
            let header = generator().render_header(&descriptor, filename).unwrap();
            let guard = include_guard(filename);
            let open = header.lines().find_map(|line| line.strip_prefix("#ifndef ")).unwrap();
            let close = header.lines().find_map(|line| line.strip_prefix("#endif // ")).unwrap();
            assert_eq!(open, guard);
            assert_eq!(close, guard);
        }
    }

    #[test]
    fn test_rendering_is_idempotent() {
        let generator = generator();
        let descriptor = filled_descriptor();
        assert_eq!(
            generator.render_source(&descriptor, "Filled.c").unwrap(),
            generator.render_source(&descriptor, "Filled.c").unwrap()
        );
    }

    #[test]
    fn test_concurrent_rendering_matches_sequential() {
        let generator = generator();
        let descriptor = filled_descriptor();
        let sequential = generator.render_source(&descriptor, "Filled.c").unwrap();

        std::thread::scope(|scope| {
            let handles: Vec<_> = (0..4)
                .map(|_| scope.spawn(|| generator.render_source(&descriptor, "Filled.c").unwrap()))
                .collect();
            for handle in handles {
                assert_eq!(handle.join().unwrap(), sequential);
            }
        });
    }

    #[test]
    fn test_pointer_spacing_in_definitions() {
        let source = generator().render_source(&filled_descriptor(), "Filled.c").unwrap();
        assert!(source.contains("void *something(void *thing) {\n}"));
        assert!(source.contains("static int *intfunc(float x) {\n}"));
        assert!(!source.contains("* something"));
        assert!(!source.contains("* thing"));
    }
}

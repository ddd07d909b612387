//! Built-in templates
//!
//! Whitespace in these sources is significant: the environment keeps trailing
//! newlines and does not trim around block tags.

use crate::constants::templates;

/// Comment block opening every generated file.
pub const PREAMBLE: &str = r#"/*
 * {{ title }}{% if project_name %} Part of project {{ project_name }}.{% endif %}
 *
 * Copyright {{ year }} {{ copyright_holder or author }}
{% if written_by %} * Written by {{ written_by }}
{% endif %} */
"#;

/// Empty-bodied definitions for every faked declaration.
pub const FAKE: &str = r#"#include "{{ fake_include }}"
{% for definition in definitions %}
{{ definition }} {
}
{% endfor %}"#;

pub const TEST_MINIMAL: &str = r#"{% include "preamble.c" %}
#include "CppUTest/TestHarness.h"
#include "{{ module_name }}.h"

TEST_GROUP({{ module_name }}Tests) {
    void setup()
    {
    }

    void teardown()
    {
    }
};

TEST({{ module_name }}Tests, DummyTest) {
    FAIL("No tests for module {{ module_name }}");
}
"#;

pub const TEST_FULL: &str = r#"{% include "preamble.c" %}
{{ sections.includes | section_header }}

#include "CppUTest/TestHarness.h"
{% for include in system_includes %}#include <{{ include }}>
{% endfor %}#include "{{ module_name }}.h"
{% for include in project_includes %}#include "{{ include }}"
{% endfor %}
{{ sections.test_group | section_header }}

TEST_GROUP({{ module_name }}Tests) {
    void setup()
    {
    }

    void teardown()
    {
    }
};

{{ sections.tests | section_header }}

TEST({{ module_name }}Tests, DummyTest) {
    FAIL("No tests for module {{ module_name }}");
}
"#;

/// Every built-in template with the name it is registered under.
pub const BUILTIN: &[(&str, &str)] = &[
    (templates::PREAMBLE, PREAMBLE),
    (templates::FAKE, FAKE),
    (templates::TEST_MINIMAL, TEST_MINIMAL),
    (templates::TEST_FULL, TEST_FULL),
];

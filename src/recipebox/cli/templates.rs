//! Template sources. Rendered with `trim_blocks` and `lstrip_blocks`, so block
//! tags on their own line leave no blank lines behind.

pub const LIST_TEMPLATE: &str = r#"{% if empty %}
{% if search %}
{{ empty_message | style("empty") }}
{% endif %}
{% else %}
{% for r in recipes %}
{{ r.id | style("id") }}  {{ r.title | style("title") }}{{ r.padding }}{{ r.age | style("time") }}
    {{ "image" | style("label") }}         {{ r.image | style("dim") }}
    {{ "ingredients" | style("label") }}   {{ r.ingredients }}
    {{ "instructions" | style("label") }}  {{ r.instructions }}
    {{ r.actions | style("dim") }}
{% if not loop.last %}

{% endif %}
{% endfor %}
{% endif %}
"#;

pub const PAGINATION_TEMPLATE: &str = r#"{% if pages %}

{{ "pages" | style("label") }}{% for p in pages %} {{ p.label | style(p.style) }}{% endfor %}   {{ hint | style("dim") }}
{% endif %}
"#;

pub const FULL_RECIPE_TEMPLATE: &str = r#"{% for r in recipes %}
{{ r.id | style("id") }} {{ r.title | style("title") }}
{{ r.age | style("time") }}

{{ "Image" | style("label") }}
{{ r.image }}

{{ "Ingredients" | style("label") }}
{{ r.ingredients }}

{{ "Instructions" | style("label") }}
{{ r.instructions }}
{% if not loop.last %}

================================

{% endif %}
{% endfor %}
"#;

pub const MESSAGES_TEMPLATE: &str = r#"{% for m in messages %}
{{ m.content | style(m.style) }}
{% endfor %}
"#;

pub const TEXT_LIST_TEMPLATE: &str = r#"{% if lines %}
{% for line in lines %}
{{ line }}
{% endfor %}
{% else %}
{{ empty_message | style("dim") }}
{% endif %}
"#;

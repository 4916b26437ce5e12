use crate::diagnostics::Diagnostic;
use crate::diagnostics::Diagnostics;
use crate::errors::Error;

use heck::ToSnakeCase;
use k8s_openapi::apiextensions_apiserver::pkg::apis::apiextensions::v1::CustomResourceDefinition;
use k8s_openapi::apiextensions_apiserver::pkg::apis::apiextensions::v1::JSONSchemaProps;
use k8s_openapi::apiextensions_apiserver::pkg::apis::apiextensions::v1::JSONSchemaPropsOrArray;
use k8s_openapi::apiextensions_apiserver::pkg::apis::apiextensions::v1::JSONSchemaPropsOrBool;
use serde::Serialize;
use serde_json::Map;
use serde_json::Value;
use std::collections::BTreeMap;

#[derive(Debug, Copy, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum ScalarType {
    String,
    Int64,
    Float64,
    Bool,
}

/*
 * Type of the elements held by a list or map attribute.
 */
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "type", content = "of", rename_all = "snake_case")]
pub enum ElementType {
    Scalar(ScalarType),
    List(Box<ElementType>),
    Map(Box<ElementType>),
    Object(NestedObject),
    Dynamic,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "kind", content = "of", rename_all = "snake_case")]
pub enum AttributeType {
    Scalar(ScalarType),
    List(ElementType),
    Map(ElementType),
    SingleNested(NestedObject),
    ListNested(NestedObject),
    MapNested(NestedObject),

    // untyped JSON, passed through as is
    Dynamic,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct NestedObject {
    pub attributes: BTreeMap<String, Attribute>,
}

#[derive(Debug, Copy, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Validator {
    NonEmpty,
}

/*
 * An attribute is keyed by its state name (snake_case) in its parent, and
 * remembers the name the same field carries in the Kubernetes JSON object.
 */
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Attribute {
    pub json_name: String,
    pub description: String,
    pub required: bool,
    pub optional: bool,
    pub computed: bool,

    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub validators: Vec<Validator>,

    #[serde(rename = "type")]
    pub value: AttributeType,
}

impl Attribute {

    pub fn computed(json_name: &str, description: &str, value: AttributeType) -> Self {
	Self{
	    json_name: json_name.to_string(),
	    description: description.to_string(),
	    required: false,
	    optional: false,
	    computed: true,
	    validators: vec![],
	    value: value,
	}
    }

    pub fn required_string(json_name: &str, description: &str) -> Self {
	Self{
	    json_name: json_name.to_string(),
	    description: description.to_string(),
	    required: true,
	    optional: false,
	    computed: false,
	    validators: vec![Validator::NonEmpty],
	    value: AttributeType::Scalar(ScalarType::String),
	}
    }

    pub fn nested(&self) -> Option<&NestedObject> {
	match &self.value {
	    AttributeType::SingleNested(obj) => Some(obj),
	    AttributeType::ListNested(obj) => Some(obj),
	    AttributeType::MapNested(obj) => Some(obj),
	    _ => None,
	}
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Schema {
    pub description: String,
    pub attributes: BTreeMap<String, Attribute>,
}

impl Schema {

    /*
     * Looks an attribute up by its dotted state path, e.g. `spec.mon.count`.
     * Nested lists and maps are walked through transparently.
     */
    pub fn attribute(&self, path: &str) -> Option<&Attribute> {
	let mut segments = path.split('.');
	let mut current = self.attributes.get(segments.next()?)?;

	for segment in segments {
	    current = current.nested()?.attributes.get(segment)?;
	}
	Some(current)
    }

    /*
     * Checks a caller supplied configuration object (keyed by state names)
     * against the schema: required attributes must be present, validators
     * must hold and computed-only attributes must not be set.
     */
    pub fn validate_config(&self, config: &Value) -> Diagnostics {
	let mut diagnostics = Diagnostics::new();

	validate_object(&self.attributes, config, "", &mut diagnostics);
	diagnostics
    }

    /*
     * Renders a Kubernetes shaped JSON object into state: every declared
     * attribute present under its state name (null when absent), anything
     * undeclared dropped.
     */
    pub fn conform(&self, value: &Value) -> Result<Value, Error> {
	conform_object(&self.attributes, value, "")
    }
}

fn join(parent: &str, name: &str) -> String {
    if parent.is_empty() {
	name.to_string()
    } else {
	format!("{}.{}", parent, name)
    }
}

fn validate_object(attributes: &BTreeMap<String, Attribute>, config: &Value, path: &str, diagnostics: &mut Diagnostics) {
    let object = match config {
	Value::Object(object) => object,
	_ => {
	    let at = tern(path.is_empty(), "<root>", path);
	    diagnostics.push(Diagnostic::error(
		"Invalid Configuration",
		format!("Expected an object at {}, got: {}", at, config),
	    ).at(at));
	    return;
	}
    };

    for (name, attribute) in attributes {
	let attr_path = join(path, name);
	let value = object.get(name).filter(|v| !v.is_null());

	match value {
	    None if attribute.required => {
		diagnostics.push(Diagnostic::error(
		    "Missing required argument",
		    format!("The argument \"{}\" is required, but no definition was found.", attr_path),
		).at(attr_path));
	    },
	    None => {},
	    Some(_) if attribute.computed && !attribute.optional => {
		diagnostics.push(Diagnostic::error(
		    "Invalid Configuration for Read-Only Attribute",
		    format!("Cannot set value for attribute \"{}\" as it is read-only.", attr_path),
		).at(attr_path));
	    },
	    Some(value) => {
		for validator in &attribute.validators {
		    if let Some(diagnostic) = check(*validator, value, &attr_path) {
			diagnostics.push(diagnostic);
		    }
		}
		if let AttributeType::SingleNested(obj) = &attribute.value {
		    validate_object(&obj.attributes, value, &attr_path, diagnostics);
		}
	    },
	}
    }
}

fn check(validator: Validator, value: &Value, path: &str) -> Option<Diagnostic> {
    match validator {
	Validator::NonEmpty => match value {
	    Value::String(s) if !s.is_empty() => None,
	    Value::String(s) => Some(Diagnostic::error(
		"Invalid Attribute Value Length",
		format!("Attribute {} string length must be at least 1, got: {}", path, s.len()),
	    ).at(path)),
	    other => Some(Diagnostic::error(
		"Incorrect attribute value type",
		format!("Attribute {} must be a string, got: {}", path, other),
	    ).at(path)),
	},
    }
}

fn tern<T>(expr: bool, when_true: T, when_false: T) -> T {
    if expr {
	when_true
    } else {
	when_false
    }
}

fn mismatch(path: &str, expected: &str, value: &Value) -> Error {
    Error::Schema(format!("{}: expected {}, got: {}", tern(path.is_empty(), "<root>", path), expected, value))
}

fn conform_object(attributes: &BTreeMap<String, Attribute>, value: &Value, path: &str) -> Result<Value, Error> {
    let object = value.as_object().ok_or_else(|| mismatch(path, "object", value))?;
    let mut out = Map::new();

    for (name, attribute) in attributes {
	let attr_path = join(path, name);
	let conformed = match object.get(&attribute.json_name) {
	    None | Some(Value::Null) => Value::Null,
	    Some(v) => conform_value(&attribute.value, v, &attr_path)?,
	};
	out.insert(name.clone(), conformed);
    }
    Ok(Value::Object(out))
}

fn conform_value(kind: &AttributeType, value: &Value, path: &str) -> Result<Value, Error> {
    match kind {
	AttributeType::Scalar(scalar) => conform_scalar(*scalar, value, path),
	AttributeType::List(element) => conform_array(value, path, |v, p| conform_element(element, v, p)),
	AttributeType::Map(element) => conform_map(value, path, |v, p| conform_element(element, v, p)),
	AttributeType::SingleNested(obj) => conform_object(&obj.attributes, value, path),
	AttributeType::ListNested(obj) => conform_array(value, path, |v, p| conform_object(&obj.attributes, v, p)),
	AttributeType::MapNested(obj) => conform_map(value, path, |v, p| conform_object(&obj.attributes, v, p)),
	AttributeType::Dynamic => Ok(value.clone()),
    }
}

fn conform_element(element: &ElementType, value: &Value, path: &str) -> Result<Value, Error> {
    if value.is_null() {
	return Ok(Value::Null);
    }

    match element {
	ElementType::Scalar(scalar) => conform_scalar(*scalar, value, path),
	ElementType::List(inner) => conform_array(value, path, |v, p| conform_element(inner, v, p)),
	ElementType::Map(inner) => conform_map(value, path, |v, p| conform_element(inner, v, p)),
	ElementType::Object(obj) => conform_object(&obj.attributes, value, path),
	ElementType::Dynamic => Ok(value.clone()),
    }
}

fn conform_array<F>(value: &Value, path: &str, f: F) -> Result<Value, Error>
where
    F: Fn(&Value, &str) -> Result<Value, Error>,
{
    let items = value.as_array().ok_or_else(|| mismatch(path, "list", value))?;
    let mut out = Vec::with_capacity(items.len());

    for (i, item) in items.iter().enumerate() {
	out.push(f(item, &format!("{}[{}]", path, i))?);
    }
    Ok(Value::Array(out))
}

fn conform_map<F>(value: &Value, path: &str, f: F) -> Result<Value, Error>
where
    F: Fn(&Value, &str) -> Result<Value, Error>,
{
    let entries = value.as_object().ok_or_else(|| mismatch(path, "map", value))?;
    let mut out = Map::new();

    for (key, item) in entries {
	out.insert(key.clone(), f(item, &format!("{}[\"{}\"]", path, key))?);
    }
    Ok(Value::Object(out))
}

fn conform_scalar(scalar: ScalarType, value: &Value, path: &str) -> Result<Value, Error> {
    match (scalar, value) {
	(ScalarType::String, Value::String(_)) => Ok(value.clone()),

	// int-or-string fields are kept as strings
	(ScalarType::String, Value::Number(n)) => Ok(Value::String(n.to_string())),

	(ScalarType::Int64, Value::Number(n)) if n.is_i64() || n.is_u64() => Ok(value.clone()),
	(ScalarType::Float64, Value::Number(_)) => Ok(value.clone()),
	(ScalarType::Bool, Value::Bool(_)) => Ok(value.clone()),
	(scalar, value) => Err(mismatch(path, &format!("{:?}", scalar).to_lowercase(), value)),
    }
}

/*
 * Builds the data source schema for `version` of a custom resource from
 * its CustomResourceDefinition: the fixed identity attributes plus the
 * whole `spec` tree, every attribute of which is computed-only.
 */
pub fn from_crd(crd: &CustomResourceDefinition, version: &str) -> Result<Schema, Error> {
    let crd_name = crd.metadata.name.clone().unwrap_or_default();
    let served = match crd.spec.versions.iter().find(|v| v.name == version) {
	Some(served) => served,
	None => {
	    let errmsg = format!("CustomResourceDefinition {} does not serve version {}", crd_name, version);
	    return Err(Error::Schema(errmsg));
	}
    };

    let root = match served.schema.as_ref().and_then(|s| s.open_api_v3_schema.as_ref()) {
	Some(root) => root,
	None => {
	    let errmsg = format!("CustomResourceDefinition {}/{} carries no openAPIV3Schema", crd_name, version);
	    return Err(Error::Schema(errmsg));
	}
    };

    let spec = match root.properties.as_ref().and_then(|p| p.get("spec")) {
	Some(spec) => spec,
	None => {
	    let errmsg = format!("CustomResourceDefinition {}/{} has no spec property", crd_name, version);
	    return Err(Error::Schema(errmsg));
	}
    };

    let kind = &crd.spec.names.kind;
    let api_version = format!("{}/{}", crd.spec.group, version);

    let mut attributes = BTreeMap::new();
    attributes.insert(
	String::from("id"),
	Attribute::computed("id", "Contains the value `metadata.name/metadata.namespace`.", AttributeType::Scalar(ScalarType::String)),
    );
    attributes.insert(
	String::from("api_version"),
	Attribute::computed("apiVersion", &format!("The API group and version of the object, always `{}`.", api_version), AttributeType::Scalar(ScalarType::String)),
    );
    attributes.insert(
	String::from("kind"),
	Attribute::computed("kind", &format!("The kind of the object, always `{}`.", kind), AttributeType::Scalar(ScalarType::String)),
    );
    attributes.insert(String::from("metadata"), metadata_attribute());
    attributes.insert(
	String::from("spec"),
	Attribute::computed("spec", spec.description.as_deref().unwrap_or_default(), attribute_type(spec)),
    );

    Ok(Schema{
	description: format!("Reads a {} ({}) object from the Kubernetes API.", kind, api_version),
	attributes: attributes,
    })
}

fn metadata_attribute() -> Attribute {
    let string_map = AttributeType::Map(ElementType::Scalar(ScalarType::String));
    let mut attributes = BTreeMap::new();

    attributes.insert(String::from("name"), Attribute::required_string("name", "Unique identifier of the object in its namespace."));
    attributes.insert(String::from("namespace"), Attribute::required_string("namespace", "Namespace the object lives in."));
    attributes.insert(String::from("labels"), Attribute::computed("labels", "Labels attached to the object.", string_map.clone()));
    attributes.insert(String::from("annotations"), Attribute::computed("annotations", "Annotations attached to the object.", string_map));

    Attribute{
	json_name: String::from("metadata"),
	description: String::from("Data that helps uniquely identify the object."),
	required: true,
	optional: false,
	computed: false,
	validators: vec![],
	value: AttributeType::SingleNested(NestedObject{ attributes: attributes }),
    }
}

/*
 * Wrapper schemas with a single allOf branch (what schemars emits for some
 * optional structs) describe the same value as the branch itself.
 */
fn hoist(props: &JSONSchemaProps) -> &JSONSchemaProps {
    let mut current = props;

    while current.type_.is_none() && current.properties.is_none() {
	match current.all_of.as_deref() {
	    Some([inner]) => current = inner,
	    _ => break,
	}
    }
    current
}

fn scalar_type(props: &JSONSchemaProps) -> Option<ScalarType> {
    if props.x_kubernetes_int_or_string == Some(true) {
	return Some(ScalarType::String);
    }

    match props.type_.as_deref() {
	Some("string") => Some(ScalarType::String),
	Some("integer") => Some(ScalarType::Int64),
	Some("number") => Some(ScalarType::Float64),
	Some("boolean") => Some(ScalarType::Bool),
	_ => None,
    }
}

fn item_schema(props: &JSONSchemaProps) -> Option<&JSONSchemaProps> {
    match props.items.as_ref()? {
	JSONSchemaPropsOrArray::Schema(item) => Some(item),
	JSONSchemaPropsOrArray::Schemas(items) if items.len() == 1 => items.first(),
	JSONSchemaPropsOrArray::Schemas(_) => None,
    }
}

fn map_value_schema(props: &JSONSchemaProps) -> Option<&JSONSchemaProps> {
    match props.additional_properties.as_ref()? {
	JSONSchemaPropsOrBool::Schema(value) => Some(value),
	JSONSchemaPropsOrBool::Bool(_) => None,
    }
}

fn nested_object(props: &JSONSchemaProps) -> Option<NestedObject> {
    let properties = props.properties.as_ref().filter(|p| !p.is_empty())?;
    let mut attributes = BTreeMap::new();

    for (json_name, child) in properties {
	let description = child.description.as_deref().unwrap_or_default();
	let attribute = Attribute::computed(json_name, description, attribute_type(child));
	attributes.insert(json_name.to_snake_case(), attribute);
    }
    Some(NestedObject{ attributes: attributes })
}

/*
 * Maps one OpenAPI v3 property onto the attribute kind exposing it.
 */
pub fn attribute_type(props: &JSONSchemaProps) -> AttributeType {
    let props = hoist(props);

    if let Some(scalar) = scalar_type(props) {
	return AttributeType::Scalar(scalar);
    }

    match props.type_.as_deref() {
	Some("array") => match item_schema(props).map(hoist) {
	    Some(item) => match nested_object(item) {
		Some(obj) => AttributeType::ListNested(obj),
		None => AttributeType::List(element_type(item)),
	    },
	    None => AttributeType::List(ElementType::Dynamic),
	},
	Some("object") | None => {
	    if let Some(obj) = nested_object(props) {
		return AttributeType::SingleNested(obj);
	    }

	    match map_value_schema(props).map(hoist) {
		Some(value) => match nested_object(value) {
		    Some(obj) => AttributeType::MapNested(obj),
		    None => AttributeType::Map(element_type(value)),
		},
		None => AttributeType::Dynamic,
	    }
	},
	Some(_) => AttributeType::Dynamic,
    }
}

fn element_type(props: &JSONSchemaProps) -> ElementType {
    let props = hoist(props);

    if let Some(scalar) = scalar_type(props) {
	return ElementType::Scalar(scalar);
    }

    match props.type_.as_deref() {
	Some("array") => match item_schema(props) {
	    Some(item) => ElementType::List(Box::new(element_type(item))),
	    None => ElementType::List(Box::new(ElementType::Dynamic)),
	},
	Some("object") | None => {
	    if let Some(obj) = nested_object(props) {
		return ElementType::Object(obj);
	    }
	    match map_value_schema(props) {
		Some(value) => ElementType::Map(Box::new(element_type(value))),
		None => ElementType::Dynamic,
	    }
	},
	Some(_) => ElementType::Dynamic,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use ceph_rook_api::CephCluster;
    use kube::CustomResourceExt;
    use pretty_assertions::assert_eq;
    use serde_json::json;

    fn ceph_cluster_schema() -> Schema {
	from_crd(&CephCluster::crd(), "v1").unwrap()
    }

    fn props(value: Value) -> JSONSchemaProps {
	serde_json::from_value(value).unwrap()
    }

    fn assert_computed_only(name: &str, attribute: &Attribute) {
	assert!(attribute.computed, "{} must be computed", name);
	assert!(!attribute.required, "{} must not be required", name);
	assert!(!attribute.optional, "{} must not be optional", name);

	if let Some(obj) = attribute.nested() {
	    for (child, attr) in &obj.attributes {
		assert_computed_only(&format!("{}.{}", name, child), attr);
	    }
	}
    }

    #[test]
    fn identity_attributes() {
	let schema = ceph_cluster_schema();

	let name = schema.attribute("metadata.name").unwrap();
	assert!(name.required);
	assert!(!name.computed);
	assert_eq!(name.validators, vec![Validator::NonEmpty]);

	let namespace = schema.attribute("metadata.namespace").unwrap();
	assert!(namespace.required);
	assert_eq!(namespace.validators, vec![Validator::NonEmpty]);

	let labels = schema.attribute("metadata.labels").unwrap();
	assert!(labels.computed);
	assert_eq!(labels.value, AttributeType::Map(ElementType::Scalar(ScalarType::String)));

	for name in ["id", "api_version", "kind"] {
	    let attr = schema.attribute(name).unwrap();
	    assert!(attr.computed);
	    assert_eq!(attr.value, AttributeType::Scalar(ScalarType::String));
	}
	assert_eq!(schema.attribute("api_version").unwrap().json_name, "apiVersion");
    }

    #[test]
    fn spec_tree_is_computed_only() {
	let schema = ceph_cluster_schema();
	let spec = schema.attribute("spec").unwrap();

	assert!(matches!(spec.value, AttributeType::SingleNested(_)));
	assert_computed_only("spec", spec);
    }

    #[test]
    fn spec_attribute_kinds() {
	let schema = ceph_cluster_schema();

	let count = schema.attribute("spec.mon.count").unwrap();
	assert_eq!(count.json_name, "count");
	assert_eq!(count.value, AttributeType::Scalar(ScalarType::Int64));

	let wait = schema.attribute("spec.wait_timeout_for_healthy_osd_in_minutes").unwrap();
	assert_eq!(wait.json_name, "waitTimeoutForHealthyOSDInMinutes");

	let ratio = schema.attribute("spec.storage.full_ratio").unwrap();
	assert_eq!(ratio.value, AttributeType::Scalar(ScalarType::Float64));

	let selectors = schema.attribute("spec.network.selectors").unwrap();
	assert_eq!(selectors.value, AttributeType::Map(ElementType::Scalar(ScalarType::String)));

	let ceph_config = schema.attribute("spec.ceph_config").unwrap();
	assert_eq!(
	    ceph_config.value,
	    AttributeType::Map(ElementType::Map(Box::new(ElementType::Scalar(ScalarType::String)))),
	);

	let placement = schema.attribute("spec.placement").unwrap();
	assert!(matches!(placement.value, AttributeType::MapNested(_)));
	assert!(schema.attribute("spec.placement.tolerations").is_some());

	let zones = schema.attribute("spec.mon.zones").unwrap();
	assert!(matches!(zones.value, AttributeType::ListNested(_)));

	let public = schema.attribute("spec.network.address_ranges.public").unwrap();
	assert_eq!(public.value, AttributeType::List(ElementType::Scalar(ScalarType::String)));
    }

    #[test]
    fn maps_openapi_properties() {
	assert_eq!(attribute_type(&props(json!({"type": "boolean"}))), AttributeType::Scalar(ScalarType::Bool));
	assert_eq!(
	    attribute_type(&props(json!({"x-kubernetes-int-or-string": true, "anyOf": [{"type": "integer"}, {"type": "string"}]}))),
	    AttributeType::Scalar(ScalarType::String),
	);
	assert_eq!(
	    attribute_type(&props(json!({"type": "object", "x-kubernetes-preserve-unknown-fields": true}))),
	    AttributeType::Dynamic,
	);
	assert_eq!(
	    attribute_type(&props(json!({"type": "array", "items": {"type": "array", "items": {"type": "integer"}}}))),
	    AttributeType::List(ElementType::List(Box::new(ElementType::Scalar(ScalarType::Int64)))),
	);

	let wrapped = attribute_type(&props(json!({
	    "allOf": [{"type": "object", "properties": {"fooBar": {"type": "string"}}}],
	    "nullable": true,
	})));
	match wrapped {
	    AttributeType::SingleNested(obj) => {
		let attr = &obj.attributes["foo_bar"];
		assert_eq!(attr.json_name, "fooBar");
	    },
	    other => panic!("expected single nested, got {:?}", other),
	}
    }

    #[test]
    fn missing_version_is_an_error() {
	let err = from_crd(&CephCluster::crd(), "v2").unwrap_err();
	assert!(err.to_string().contains("does not serve version v2"));
    }

    #[test]
    fn conform_fills_absent_attributes_with_null() {
	let schema = ceph_cluster_schema();
	let state = schema.conform(&json!({
	    "id": "rook-ceph/rook-ceph",
	    "apiVersion": "ceph.rook.io/v1",
	    "kind": "CephCluster",
	    "metadata": {"name": "rook-ceph", "namespace": "rook-ceph"},
	    "spec": {"mon": {"count": 3}, "notInTheSchema": 1},
	})).unwrap();

	assert_eq!(state["api_version"], json!("ceph.rook.io/v1"));
	assert_eq!(state["metadata"]["labels"], Value::Null);
	assert_eq!(state["spec"]["mon"]["count"], json!(3));
	assert_eq!(state["spec"]["mon"]["zones"], Value::Null);
	assert_eq!(state["spec"]["mgr"], Value::Null);
	assert!(state["spec"].get("notInTheSchema").is_none());
    }

    #[test]
    fn conform_renames_nested_keys_but_not_map_keys() {
	let schema = ceph_cluster_schema();
	let state = schema.conform(&json!({
	    "metadata": {"name": "a", "namespace": "b", "labels": {"app.kubernetes.io/name": "ceph"}},
	    "spec": {
		"network": {"selectors": {"publicNet": "public-conf"}, "ipFamily": "IPv6"},
		"placement": {"allDaemons": {"tolerations": [{"key": "k", "operator": "Exists"}]}},
	    },
	})).unwrap();

	assert_eq!(state["metadata"]["labels"], json!({"app.kubernetes.io/name": "ceph"}));
	assert_eq!(state["spec"]["network"]["ip_family"], json!("IPv6"));
	assert_eq!(state["spec"]["network"]["selectors"], json!({"publicNet": "public-conf"}));
	assert_eq!(state["spec"]["placement"]["allDaemons"]["tolerations"][0]["operator"], json!("Exists"));
	assert_eq!(state["spec"]["placement"]["allDaemons"]["tolerations"][0]["effect"], Value::Null);
    }

    #[test]
    fn conform_rejects_type_mismatch() {
	let schema = ceph_cluster_schema();
	let err = schema.conform(&json!({"spec": {"mon": {"count": "three"}}})).unwrap_err();

	assert!(err.to_string().contains("spec.mon.count"));
    }

    #[test]
    fn validate_config_requires_identity() {
	let schema = ceph_cluster_schema();

	let ok = schema.validate_config(&json!({"metadata": {"name": "rook-ceph", "namespace": "rook-ceph"}}));
	assert!(ok.is_empty());

	let missing = schema.validate_config(&json!({"metadata": {"name": "rook-ceph"}}));
	assert!(missing.has_error());
	let attrs: Vec<_> = missing.errors().filter_map(|d| d.attribute.clone()).collect();
	assert_eq!(attrs, vec![String::from("metadata.namespace")]);

	let empty = schema.validate_config(&json!({"metadata": {"name": "", "namespace": "rook-ceph"}}));
	let diagnostic = empty.errors().next().unwrap();
	assert_eq!(diagnostic.summary, "Invalid Attribute Value Length");
	assert_eq!(diagnostic.attribute.as_deref(), Some("metadata.name"));
    }

    #[test]
    fn validate_config_rejects_computed_attributes() {
	let schema = ceph_cluster_schema();
	let diagnostics = schema.validate_config(&json!({
	    "metadata": {"name": "a", "namespace": "b"},
	    "spec": {"mon": {"count": 3}},
	}));

	let diagnostic = diagnostics.errors().next().unwrap();
	assert_eq!(diagnostic.summary, "Invalid Configuration for Read-Only Attribute");
	assert_eq!(diagnostic.attribute.as_deref(), Some("spec"));
    }
}

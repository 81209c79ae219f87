//! # Type Registry
//!
//! Host types are made invocable by registering a [`TypeDesc`]: the qualified type
//! name plus its constructors and methods, each with a parameter-kind list and a
//! typed body. Lookups go through the [`TypeSource`] trait so the resolver and the
//! coercer work against any registry implementation.
//!
//! Constructors and methods are kept in registration order, and that order is the
//! enumeration order seen by overload resolution.
//!
//! ## Usage
//!
//! ```
//! use te_invoke_core::registry::{TypeDesc, TypeRegistry, TypeSource};
//! use te_invoke_types::{CoercedValue, ParamKind};
//!
//! #[derive(Debug)]
//! struct Meter(f64);
//!
//! let registry = TypeRegistry::new();
//! registry
//!     .register(
//!         TypeDesc::builder::<Meter>("demo.Meter")
//!             .constructor([ParamKind::F64], |args| Ok(Meter(args[0].as_f64()?)))
//!             .method("value", [], |this, _| Ok(Some(CoercedValue::F64(this.0))))
//!             .build(),
//!     )
//!     .unwrap();
//!
//! let desc = registry.load("demo.Meter").unwrap();
//! assert_eq!(desc.constructors().len(), 1);
//! assert_eq!(desc.methods()[0].name(), "value");
//! ```

use anyhow::{anyhow, bail, Result};
use parking_lot::RwLock;
use std::any::Any;
use std::collections::HashMap;
use std::fmt;
use std::marker::PhantomData;
use std::sync::Arc;
use te_invoke_types::{CoercedValue, Node, OperationSignature, ParamKind};
use tracing::debug;

use crate::coerce::coerce_nodes;
use crate::errors::InvokeError;

// =============================================================================
// Instances
// =============================================================================

/// A value that can live inside an [`Instance`].
pub trait HostValue: Any + fmt::Debug + Send + Sync {
    fn as_any(&self) -> &dyn Any;
    fn as_any_mut(&mut self) -> &mut dyn Any;
    fn into_any(self: Box<Self>) -> Box<dyn Any>;
}

impl<T: Any + fmt::Debug + Send + Sync> HostValue for T {
    fn as_any(&self) -> &dyn Any {
        self
    }

    fn as_any_mut(&mut self) -> &mut dyn Any {
        self
    }

    fn into_any(self: Box<Self>) -> Box<dyn Any> {
        self
    }
}

/// A constructed host value tagged with the name of its registered type.
#[derive(Debug)]
pub struct Instance {
    type_name: String,
    value: Box<dyn HostValue>,
}

impl Instance {
    pub fn new<T: HostValue>(type_name: impl Into<String>, value: T) -> Self {
        Self {
            type_name: type_name.into(),
            value: Box::new(value),
        }
    }

    pub fn type_name(&self) -> &str {
        &self.type_name
    }

    pub fn host_value(&self) -> &dyn HostValue {
        &*self.value
    }

    pub fn is<T: Any>(&self) -> bool {
        (*self.value).as_any().is::<T>()
    }

    pub fn downcast_ref<T: Any>(&self) -> Option<&T> {
        (*self.value).as_any().downcast_ref::<T>()
    }

    pub fn downcast_mut<T: Any>(&mut self) -> Option<&mut T> {
        (*self.value).as_any_mut().downcast_mut::<T>()
    }

    /// Take the host value out, or `None` if it is not a `T`.
    pub fn into_inner<T: Any>(self) -> Option<T> {
        <dyn HostValue as HostValue>::into_any(self.value)
            .downcast::<T>()
            .ok()
            .map(|boxed| *boxed)
    }
}

// =============================================================================
// Callables
// =============================================================================

type ConstructorBody = Arc<dyn Fn(&[CoercedValue]) -> Result<Box<dyn HostValue>> + Send + Sync>;
type MethodBody = Arc<
    dyn Fn(Option<&mut Instance>, &[CoercedValue]) -> Result<Option<CoercedValue>> + Send + Sync,
>;

/// A registered constructor.
#[derive(Clone)]
pub struct Constructor {
    signature: OperationSignature,
    body: ConstructorBody,
}

impl Constructor {
    pub fn signature(&self) -> &OperationSignature {
        &self.signature
    }

    pub fn params(&self) -> &[ParamKind] {
        &self.signature.params
    }

    pub fn arity(&self) -> usize {
        self.signature.arity()
    }

    /// Run the constructor body with already-coerced arguments.
    pub fn invoke(&self, args: &[CoercedValue]) -> Result<Instance> {
        check_arity(&self.signature, args.len())?;
        let value = (self.body)(args).map_err(|source| InvokeError::Invocation {
            type_name: self.signature.type_name.clone(),
            operation: self.signature.name.clone(),
            source,
        })?;
        Ok(Instance {
            type_name: self.signature.type_name.clone(),
            value,
        })
    }
}

impl fmt::Debug for Constructor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Constructor({})", self.signature)
    }
}

/// A registered method, static or bound to an instance.
#[derive(Clone)]
pub struct Method {
    signature: OperationSignature,
    body: MethodBody,
}

impl Method {
    pub fn signature(&self) -> &OperationSignature {
        &self.signature
    }

    pub fn name(&self) -> &str {
        &self.signature.name
    }

    pub fn params(&self) -> &[ParamKind] {
        &self.signature.params
    }

    pub fn arity(&self) -> usize {
        self.signature.arity()
    }

    pub fn is_static(&self) -> bool {
        self.signature.is_static
    }

    /// Invoke with already-coerced arguments.
    ///
    /// Instance methods need a receiver; static methods ignore it.
    pub fn invoke(
        &self,
        receiver: Option<&mut Instance>,
        args: &[CoercedValue],
    ) -> Result<Option<CoercedValue>> {
        check_arity(&self.signature, args.len())?;
        if !self.signature.is_static && receiver.is_none() {
            return Err(InvokeError::MissingReceiver {
                operation: self.signature.to_string(),
            }
            .into());
        }
        let receiver = if self.signature.is_static {
            None
        } else {
            receiver
        };
        (self.body)(receiver, args).map_err(|source| {
            InvokeError::Invocation {
                type_name: self.signature.type_name.clone(),
                operation: self.signature.name.clone(),
                source,
            }
            .into()
        })
    }

    /// Coerce `nodes` to this method's parameter kinds, then invoke.
    pub fn invoke_with_nodes(
        &self,
        receiver: Option<&mut Instance>,
        nodes: &[Node],
    ) -> Result<Option<CoercedValue>> {
        check_arity(&self.signature, nodes.len())?;
        let args = coerce_nodes(&self.signature.type_name, self.params(), nodes)?;
        self.invoke(receiver, &args)
    }
}

impl fmt::Debug for Method {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Method({})", self.signature)
    }
}

fn check_arity(signature: &OperationSignature, actual: usize) -> Result<()> {
    if actual != signature.arity() {
        return Err(InvokeError::ArityMismatch {
            operation: signature.to_string(),
            expected: signature.arity(),
            actual,
        }
        .into());
    }
    Ok(())
}

// =============================================================================
// Type descriptors
// =============================================================================

/// Everything the resolver and the coercer know about one host type.
#[derive(Debug, Clone)]
pub struct TypeDesc {
    name: String,
    constructors: Vec<Constructor>,
    methods: Vec<Arc<Method>>,
}

impl TypeDesc {
    pub fn builder<T: HostValue>(name: impl Into<String>) -> TypeDescBuilder<T> {
        TypeDescBuilder {
            desc: TypeDesc {
                name: name.into(),
                constructors: Vec::new(),
                methods: Vec::new(),
            },
            _host: PhantomData,
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    /// Constructors in registration order.
    pub fn constructors(&self) -> &[Constructor] {
        &self.constructors
    }

    /// Methods in registration order.
    pub fn methods(&self) -> &[Arc<Method>] {
        &self.methods
    }
}

/// Builds a [`TypeDesc`] whose callables produce and operate on `T`.
pub struct TypeDescBuilder<T> {
    desc: TypeDesc,
    _host: PhantomData<fn() -> T>,
}

impl<T: HostValue> TypeDescBuilder<T> {
    pub fn constructor<F>(mut self, params: impl IntoIterator<Item = ParamKind>, body: F) -> Self
    where
        F: Fn(&[CoercedValue]) -> Result<T> + Send + Sync + 'static,
    {
        let signature =
            OperationSignature::constructor(self.desc.name.clone(), params.into_iter().collect());
        let body: ConstructorBody = Arc::new(move |args: &[CoercedValue]| {
            body(args).map(|value| Box::new(value) as Box<dyn HostValue>)
        });
        self.desc.constructors.push(Constructor { signature, body });
        self
    }

    /// Register an instance method; the body receives the downcast receiver.
    pub fn method<F>(
        mut self,
        name: impl Into<String>,
        params: impl IntoIterator<Item = ParamKind>,
        body: F,
    ) -> Self
    where
        F: Fn(&mut T, &[CoercedValue]) -> Result<Option<CoercedValue>> + Send + Sync + 'static,
    {
        let signature = OperationSignature::new(
            self.desc.name.clone(),
            name,
            params.into_iter().collect(),
            false,
        );
        let body: MethodBody = Arc::new(
            move |receiver: Option<&mut Instance>,
                  args: &[CoercedValue]|
                  -> Result<Option<CoercedValue>> {
                let receiver = receiver.ok_or_else(|| anyhow!("missing receiver"))?;
                if !receiver.is::<T>() {
                    bail!(
                        "receiver of type {} does not hold a {}",
                        receiver.type_name(),
                        std::any::type_name::<T>()
                    );
                }
                let this = receiver
                    .downcast_mut::<T>()
                    .ok_or_else(|| anyhow!("receiver downcast failed"))?;
                body(this, args)
            },
        );
        self.desc.methods.push(Arc::new(Method { signature, body }));
        self
    }

    pub fn static_method<F>(
        mut self,
        name: impl Into<String>,
        params: impl IntoIterator<Item = ParamKind>,
        body: F,
    ) -> Self
    where
        F: Fn(&[CoercedValue]) -> Result<Option<CoercedValue>> + Send + Sync + 'static,
    {
        let signature = OperationSignature::new(
            self.desc.name.clone(),
            name,
            params.into_iter().collect(),
            true,
        );
        let body: MethodBody =
            Arc::new(move |_: Option<&mut Instance>, args: &[CoercedValue]| body(args));
        self.desc.methods.push(Arc::new(Method { signature, body }));
        self
    }

    pub fn build(self) -> TypeDesc {
        self.desc
    }
}

// =============================================================================
// TypeSource
// =============================================================================

/// The namespace qualified type names are resolved against.
pub trait TypeSource {
    /// Find a type by qualified name.
    fn lookup(&self, type_name: &str) -> Option<Arc<TypeDesc>>;

    /// Like [`lookup`](TypeSource::lookup), but a missing type is an
    /// [`InvokeError::TypeNotFound`] error.
    fn load(&self, type_name: &str) -> Result<Arc<TypeDesc>> {
        let desc = self.lookup(type_name).ok_or_else(|| InvokeError::TypeNotFound {
            type_name: type_name.to_string(),
        })?;
        debug!(
            type_name,
            constructors = desc.constructors().len(),
            methods = desc.methods().len(),
            "loaded type"
        );
        Ok(desc)
    }
}

/// In-memory [`TypeSource`], safe to share between threads.
#[derive(Default)]
pub struct TypeRegistry {
    types: RwLock<HashMap<String, Arc<TypeDesc>>>,
}

impl TypeRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a type. Registering the same name twice is an error.
    pub fn register(&self, desc: TypeDesc) -> Result<()> {
        let mut types = self.types.write();
        if types.contains_key(desc.name()) {
            return Err(InvokeError::DuplicateType {
                type_name: desc.name().to_string(),
            }
            .into());
        }
        debug!(
            type_name = desc.name(),
            constructors = desc.constructors().len(),
            methods = desc.methods().len(),
            "registered type"
        );
        types.insert(desc.name().to_string(), Arc::new(desc));
        Ok(())
    }

    pub fn contains(&self, type_name: &str) -> bool {
        self.types.read().contains_key(type_name)
    }

    /// Registered type names, sorted.
    pub fn type_names(&self) -> Vec<String> {
        let mut names: Vec<String> = self.types.read().keys().cloned().collect();
        names.sort();
        names
    }

    pub fn len(&self) -> usize {
        self.types.read().len()
    }

    pub fn is_empty(&self) -> bool {
        self.types.read().is_empty()
    }
}

impl TypeSource for TypeRegistry {
    fn lookup(&self, type_name: &str) -> Option<Arc<TypeDesc>> {
        self.types.read().get(type_name).cloned()
    }
}

impl<S: TypeSource + ?Sized> TypeSource for Arc<S> {
    fn lookup(&self, type_name: &str) -> Option<Arc<TypeDesc>> {
        (**self).lookup(type_name)
    }
}

impl fmt::Debug for TypeRegistry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("TypeRegistry")
            .field("types", &self.type_names())
            .finish()
    }
}

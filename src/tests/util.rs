macro_rules! leaf {
    ($x:tt) => { crate::ExpressionNode::leaf(stringify!($x)) };
}

macro_rules! op {
    (+, $l:expr, $r:expr $(,)?) => { crate::ExpressionNode::operator(crate::Operator::Add, $l, $r) };
    (-, $l:expr, $r:expr $(,)?) => { crate::ExpressionNode::operator(crate::Operator::Subtract, $l, $r) };
    (*, $l:expr, $r:expr $(,)?) => { crate::ExpressionNode::operator(crate::Operator::Multiply, $l, $r) };
    (/, $l:expr, $r:expr $(,)?) => { crate::ExpressionNode::operator(crate::Operator::Divide, $l, $r) };
    (^, $l:expr, $r:expr $(,)?) => { crate::ExpressionNode::operator(crate::Operator::Power, $l, $r) };
}

macro_rules! tree {
    ($e:expr) => { crate::node::analyzer::build($e).unwrap() };
}

macro_rules! render {
    ($e:expr, $w:expr, $h:expr $(,)?) => { {
        let equation = crate::Equation::parse($e).unwrap();
        let mut renderer = crate::renderers::AsciiRenderer::new(crate::render::Area::new($w, $h));
        <crate::renderers::AsciiRenderer as crate::render::Renderer>::draw_tree(
            &mut renderer,
            &equation.tree().unwrap(),
            equation.as_str(),
            &crate::render::RenderSettings::ascii(),
        );
        renderer.lines()
    } };
}
